//! The `quizscore play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use quizscore_core::bank::QuestionBank;
use quizscore_core::engine::{QuizEngine, QuizEngineConfig, QuizEvent};
use quizscore_core::highscore::Highscore;
use quizscore_core::report::QuizReport;
use quizscore_core::QuizError;

use crate::commands::highscore::render_table;
use crate::config::{load_config_from, QuizConfig};

/// Command-line arguments for `play`.
pub struct PlayArgs {
    pub bank: PathBuf,
    pub player: Option<String>,
    pub no_shuffle: bool,
    pub highscore: Option<PathBuf>,
    pub max_scores: Option<usize>,
    pub report: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    let bank = quizscore_core::parser::parse_question_bank(&args.bank)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&bank, &args, config, stdin.lock(), stdout.lock())
}

/// Play `bank` reading answers from `input` and writing to `out`.
fn run<R: BufRead, W: Write>(
    bank: &QuestionBank,
    args: &PlayArgs,
    mut config: QuizConfig,
    mut input: R,
    mut out: W,
) -> Result<()> {
    if let Some(player) = &args.player {
        config.player_name = player.clone();
    }
    if args.no_shuffle {
        config.shuffle = false;
    }
    if let Some(path) = &args.highscore {
        config.highscore_file = path.clone();
    }
    if let Some(max) = args.max_scores {
        config.max_highscores = max;
    }

    let engine_config = QuizEngineConfig {
        points_per_correct: config.points_per_correct,
        shuffle: config.shuffle,
    };
    let mut engine = QuizEngine::new(bank, config.player_name.as_str(), engine_config)
        .with_context(|| format!("cannot start quiz from bank {:?}", bank.name))?;

    writeln!(out, "{} ({} questions)", bank.name, bank.len())?;
    writeln!(out, "Answer with the choice number or its text, 'q' to quit.")?;

    let mut event = engine.start();
    let finished = loop {
        match event {
            QuizEvent::Question {
                question,
                number,
                total,
            } => {
                writeln!(out, "\nQuestion {number}/{total} [{}]", question.category())?;
                writeln!(out, "{}", question.text())?;
                for (i, choice) in question.choices().iter().enumerate() {
                    writeln!(out, "  {}) {choice}", i + 1)?;
                }

                let answered = loop {
                    write!(out, "> ")?;
                    out.flush()?;
                    let Some(answer) = read_answer(&mut input)? else {
                        break None;
                    };
                    if answer.eq_ignore_ascii_case("q") {
                        break None;
                    }
                    // Numbers pick by position first; a numeric choice text
                    // like "1990" still matches when no such position exists.
                    let attempt = match answer.parse::<usize>() {
                        Ok(n) => match engine.answer_choice_number(n) {
                            Err(QuizError::InvalidQuestionChoice(_)) => {
                                engine.answer_question(&answer)
                            }
                            other => other,
                        },
                        Err(_) => engine.answer_question(&answer),
                    };
                    match attempt {
                        Ok(answered) => break Some(answered),
                        Err(QuizError::InvalidQuestionChoice(_)) => {
                            writeln!(out, "Not a valid choice, try again.")?;
                        }
                        Err(e) => return Err(e.into()),
                    }
                };
                match answered {
                    Some(answered) => event = answered,
                    None => break false,
                }
            }
            QuizEvent::Correct(outcome) => {
                writeln!(out, "{}", outcome.feedback)?;
                writeln!(out, "{}: {} points.", outcome.player_name, outcome.score)?;
                event = engine.continue_quiz();
            }
            QuizEvent::Incorrect(outcome) => {
                writeln!(out, "{}", outcome.feedback)?;
                writeln!(out, "The correct answer was: {}", outcome.correct_choice)?;
                writeln!(out, "{}: {} points.", outcome.player_name, outcome.score)?;
                event = engine.continue_quiz();
            }
            QuizEvent::Done { player_name, score } => {
                writeln!(out, "\nQUIZ DONE!")?;
                writeln!(out, "{player_name}: {score} points.")?;
                break true;
            }
        }
    };

    if finished {
        let mut highscore = Highscore::load(&config.highscore_file)?;
        engine.record_highscore(&mut highscore)?;
        highscore.top_n(config.max_highscores);
        highscore.save(&config.highscore_file)?;

        writeln!(out, "\nHIGHSCORE")?;
        writeln!(out, "{}", render_table(&highscore))?;
    } else {
        writeln!(
            out,
            "\nQuiz aborted. {} points were not recorded.",
            engine.result().score()
        )?;
    }

    let summary = engine.summary();
    if !summary.all_category_summaries().is_empty() {
        writeln!(out, "\nSUMMARY")?;
        for line in summary.to_lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        for line in summary.recommendations().to_lines(&bank.chapters) {
            writeln!(out, "{line}")?;
        }
    }

    let report = QuizReport::new(bank, engine.result());
    let report_path = args.report.clone().or_else(|| {
        config
            .report_dir
            .as_ref()
            .map(|dir| dir.join(format!("quiz-{}.json", report.id)))
    });
    if let Some(path) = report_path {
        report.save_json(&path)?;
        writeln!(out, "\nReport saved to {}", path.display())?;
    }

    Ok(())
}

/// Next trimmed non-empty line, or `None` at end of input.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }
}
