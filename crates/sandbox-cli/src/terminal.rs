//! Line-oriented terminal walkthrough
//!
//! Renders whatever the player currently shows and turns each input line
//! into one player action. Works over any `BufRead` / `Write` pair so the
//! whole walkthrough can be driven from a script.

use anyhow::Result;
use sandbox_catalog::AffectedPerson;
use sandbox_player::{
    Action, AnalyticsKind, Decision, Effect, ModalView, Outcome, PersistenceSink, PhaseKind,
    Progress, Session, StepView,
};
use std::io::{BufRead, Write};

/// Width of the progress bar in characters
const BAR_WIDTH: usize = 20;

const ETHICS_NOTICE: &str = "\
This sandbox simulates harmful scenarios so you can practise ethical judgement.
Techniques shown here must never be used against real people or systems.";

/// What one walkthrough did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayReport {
    /// Inputs the player accepted
    pub accepted: usize,
    /// Inputs the player refused
    pub refused: usize,
    /// Scenarios played to the end
    pub completed: usize,
    /// Records the store failed to save
    pub failed_writes: usize,
}

/// Interactive walkthrough over a reader / writer pair
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create new terminal
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until the learner quits or input ends
    ///
    /// # Errors
    /// Only terminal I/O errors; refused inputs and failed writes are
    /// reported on the terminal and counted
    pub fn run<S: PersistenceSink>(&mut self, session: &mut Session<S>) -> Result<PlayReport> {
        let mut report = PlayReport::default();

        while let Some(action) = self.next_action(session)? {
            match session.handle(action) {
                Ok(outcome) => {
                    report.accepted += 1;
                    self.report_outcome(&outcome, &mut report)?;
                }
                Err(e) => {
                    report.refused += 1;
                    writeln!(self.output, "! {e}")?;
                }
            }
        }

        writeln!(self.output, "Goodbye.")?;
        self.output.flush()?;
        Ok(report)
    }

    /// Render the current screen and read the next action; `None` to quit
    fn next_action<S: PersistenceSink>(&mut self, session: &Session<S>) -> Result<Option<Action>> {
        let player = session.player();
        loop {
            match player.phase().kind() {
                PhaseKind::Gate => {
                    writeln!(self.output, "{ETHICS_NOTICE}")?;
                    let Some(line) = self.prompt("Do you agree to use this sandbox ethically? [y/n/q] ")? else {
                        return Ok(None);
                    };
                    match line.as_str() {
                        "q" => return Ok(None),
                        "y" | "yes" => return Ok(Some(Action::Agree { agreed: true })),
                        _ => return Ok(Some(Action::Agree { agreed: false })),
                    }
                }
                PhaseKind::Catalog => {
                    writeln!(self.output, "\nScenarios:")?;
                    for (n, (id, scenario)) in player.catalog().iter().enumerate() {
                        writeln!(
                            self.output,
                            "  {}) {id} - {} ({} steps)",
                            n + 1,
                            scenario.title,
                            scenario.step_count()
                        )?;
                    }
                    let Some(line) = self.prompt("Choose a scenario (number or id, q to quit): ")? else {
                        return Ok(None);
                    };
                    if line == "q" {
                        return Ok(None);
                    }
                    let id = line
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|i| player.catalog().ids().nth(i))
                        .map_or(line.clone(), ToString::to_string);
                    return Ok(Some(Action::SelectScenario { id }));
                }
                PhaseKind::Playing => {
                    let view = player.current_step_view()?;
                    self.render_step(&view)?;
                    let question = format!("[n] {}  [b] Back  [q] Quit: ", view.advance_label.as_str());
                    let Some(line) = self.prompt(&question)? else {
                        return Ok(None);
                    };
                    match line.as_str() {
                        "" | "n" => return Ok(Some(Action::Advance)),
                        "b" => return Ok(Some(Action::GoBack)),
                        "q" => return Ok(None),
                        other => writeln!(self.output, "! unknown command {other:?}")?,
                    }
                }
                PhaseKind::AwaitingConsequenceDecision => {
                    if let Some(ModalView::Consequence { affected }) = player.active_modal() {
                        self.render_affected(affected)?;
                    }
                    let tokens: Vec<_> = Decision::ALL.iter().map(|d| d.as_str()).collect();
                    let question = format!("Your decision ({}): ", tokens.join(" / "));
                    let Some(line) = self.prompt(&question)? else {
                        return Ok(None);
                    };
                    match line.parse::<Decision>() {
                        Ok(choice) => return Ok(Some(Action::Decide { choice })),
                        Err(e) => writeln!(self.output, "! {e}")?,
                    }
                }
                PhaseKind::AwaitingReflection => {
                    if let Some(ModalView::Reflection { prompt }) = player.active_modal() {
                        writeln!(self.output, "\nReflection: {prompt}")?;
                    }
                    let Some(text) = self.prompt("> ")? else {
                        return Ok(None);
                    };
                    return Ok(Some(Action::SubmitReflection { text }));
                }
            }
        }
    }

    fn report_outcome(&mut self, outcome: &Outcome, report: &mut PlayReport) -> Result<()> {
        for failed in &outcome.failed {
            writeln!(
                self.output,
                "! could not save {}: {}",
                failed.effect.key(),
                failed.error
            )?;
        }
        report.failed_writes += outcome.failed.len();

        let finished = outcome
            .persisted
            .iter()
            .chain(outcome.failed.iter().map(|f| &f.effect))
            .filter_map(Effect::as_analytics)
            .any(|e| e.event_name == AnalyticsKind::ScenarioCompleted);
        if finished {
            report.completed += 1;
            writeln!(self.output, "\nScenario complete. Your reflections have been recorded.")?;
        }
        Ok(())
    }

    fn render_step(&mut self, view: &StepView<'_>) -> Result<()> {
        writeln!(self.output, "\n== {} ==", view.scenario_title)?;
        writeln!(
            self.output,
            "Step {}/{} {}",
            view.progress.step_index + 1,
            view.progress.step_count,
            progress_bar(view.progress)
        )?;
        writeln!(self.output, "{}", view.title())?;
        if !view.step.content.is_empty() {
            writeln!(self.output, "{}", view.step.content)?;
        }
        if let Some(email) = view.email() {
            for line in email.lines() {
                writeln!(self.output, "  | {line}")?;
            }
        }
        for (letter, option) in ('a'..='z').zip(view.options()) {
            writeln!(self.output, "  {letter}) {option}")?;
        }
        if !view.step.task.is_empty() {
            writeln!(self.output, "Task: {}", view.step.task)?;
        }
        Ok(())
    }

    fn render_affected(&mut self, affected: &[AffectedPerson]) -> Result<()> {
        writeln!(self.output, "\nWho would be affected:")?;
        for person in affected {
            writeln!(self.output, "  {} {}: {}", person.emoji, person.name, person.story)?;
            writeln!(self.output, "     Impact: {}", person.impact)?;
        }
        Ok(())
    }

    /// Print `question` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// `[#####---------------] 25%`
#[must_use]
pub fn progress_bar(progress: Progress) -> String {
    let filled = if progress.step_count == 0 {
        0
    } else {
        ((progress.step_index + 1) * BAR_WIDTH / progress.step_count).min(BAR_WIDTH)
    };
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.percent()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandbox_player::RecordReader;
    use sandbox_storage::MemoryStore;
    use sandbox_test_utils::setup_builtin_player;
    use std::io::Cursor;

    fn run(script: &str) -> (PlayReport, String, MemoryStore) {
        let store = MemoryStore::new();
        let mut session = Session::new(setup_builtin_player(), &store);
        let mut output = Vec::new();
        let report = Terminal::new(Cursor::new(script.to_string()), &mut output)
            .run(&mut session)
            .unwrap();
        drop(session);
        (report, String::from_utf8(output).unwrap(), store)
    }

    #[test]
    fn progress_bar_fills() {
        let bar = progress_bar(Progress {
            step_index: 1,
            step_count: 4,
        });
        assert_eq!(bar, "[##########----------] 50%");
    }

    #[test]
    fn declining_agreement_is_refused() {
        let (report, output, _) = run("n\nq\n");
        assert_eq!(report.refused, 1);
        assert_eq!(report.accepted, 0);
        assert!(output.contains("agreement"));
    }

    #[test]
    fn bias_walkthrough() {
        let (report, output, store) = run("y\n2\nn\nn\nn\ntest\nq\n");
        assert_eq!(report.completed, 1);
        assert_eq!(report.failed_writes, 0);
        assert!(output.contains("Scenario complete"));

        let reflections = store.reflections().unwrap();
        assert_eq!(reflections.len(), 1);
        assert_eq!(reflections[0].text, "test");
        assert_eq!(reflections[0].step, 2);
    }

    #[test]
    fn unknown_decision_reprompts() {
        let (report, output, _) = run("y\nphishing\nn\nn\nn\nmaybe\nproceed\nq\n");
        assert!(output.contains("unknown decision"));
        assert_eq!(report.refused, 0);
    }

    #[test]
    fn eof_quits() {
        let (report, output, _) = run("");
        assert_eq!(report, PlayReport::default());
        assert!(output.ends_with("Goodbye.\n"));
    }
}
