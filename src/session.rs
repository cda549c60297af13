// src/session.rs
// Interactive menu loop orchestrating the engine, history, and config

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::engine;
use crate::history::History;
use crate::ops::{Arity, Operation};
use crate::ui;
use crate::validation;

/// Holds the application state for one interactive run.
pub struct Session {
    config: Config,
    history: History,
}

impl Session {
    /// Create a session, loading persisted history. Persistence is
    /// best-effort: a failed load logs a warning and starts empty.
    pub fn new(config: Config) -> Self {
        let history_path = config.history_path.clone().unwrap_or_default();
        let mut history = History::new(history_path, config.max_history);

        if let Err(e) = history.load() {
            warn!(error = %e, "failed to load history, starting empty");
            ui::print_warning("Could not load calculation history; starting fresh.");
        }

        Session { config, history }
    }

    /// Run the main menu loop until the user exits.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_welcome {
            ui::welcome_banner();
        }

        let items = [
            "Basic calculator (+, -, *, /)",
            "Advanced calculator (^, √, %, !)",
            "Batch calculations",
            "Calculation history",
            "Settings",
            "Help",
            "Exit",
        ];

        loop {
            let choice = Select::new()
                .with_prompt("Main menu")
                .items(&items)
                .default(0)
                .interact()?;

            debug!(choice, "handling menu option");

            match choice {
                0 => self.run_calculator("BASIC CALCULATOR", &Operation::BASIC)?,
                1 => self.run_calculator("ADVANCED CALCULATOR", &Operation::ADVANCED)?,
                2 => {
                    ui::print_info("Batch calculations are not available yet.");
                    ui::press_enter_to_continue();
                }
                3 => self.show_history(),
                4 => self.show_settings(),
                5 => {
                    if self.config.clear_screen {
                        ui::clear_screen();
                    }
                    ui::print_help();
                    ui::press_enter_to_continue();
                }
                _ => {
                    if self.confirm_exit()? {
                        self.shutdown();
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Offer one of the operation sets, then perform a calculation.
    fn run_calculator(&mut self, title: &str, operations: &[Operation]) -> Result<()> {
        if self.config.clear_screen {
            ui::clear_screen();
        }
        println!("{title}:");
        ui::print_divider();

        let mut labels: Vec<String> = operations
            .iter()
            .map(|op| format!("{} ({})", op.name(), op.symbol()))
            .collect();
        labels.push("Back to main menu".to_string());

        let choice = Select::new()
            .with_prompt("Operation")
            .items(&labels)
            .default(0)
            .interact()?;

        if choice == operations.len() {
            return Ok(());
        }

        self.perform_calculation(operations[choice])?;
        ui::press_enter_to_continue();
        Ok(())
    }

    /// Collect operands, calculate, record the outcome, and show it.
    /// Calculation errors are reported and recorded; the session keeps
    /// going so the user can retry from the menu.
    fn perform_calculation(&mut self, operation: Operation) -> Result<()> {
        let operands = self.read_operands(operation)?;
        let expression = build_expression(operation, &operands);

        match engine::calculate(operation, &operands) {
            Ok(result) => {
                let formatted = engine::format_result(result, self.config.precision);
                ui::print_result(operation.name(), &expression, &formatted);

                if self.config.save_history {
                    self.history.add_success(operation.name(), &expression, result);
                    if self.config.auto_save {
                        if let Err(e) = self.history.save() {
                            warn!(error = %e, "failed to save history");
                        }
                    }
                }

                info!(expression = %expression, result = %formatted, "calculation completed");
            }
            Err(err) => {
                ui::print_error(&err);
                if self.config.save_history {
                    self.history.add_error(operation.name(), &expression, &err);
                }
            }
        }

        Ok(())
    }

    /// Prompt for as many operands as the operation needs.
    fn read_operands(&self, operation: Operation) -> Result<Vec<f64>> {
        match operation.arity() {
            Arity::Exactly(1) => Ok(vec![self.prompt_number("Enter number")?]),
            _ => Ok(vec![
                self.prompt_number("Enter first number")?,
                self.prompt_number("Enter second number")?,
            ]),
        }
    }

    /// Read a number, re-prompting until the input validates.
    fn prompt_number(&self, prompt: &str) -> Result<f64> {
        loop {
            let input: String = Input::new().with_prompt(prompt).interact_text()?;
            match validation::parse_number(&input) {
                Ok(num) => return Ok(num),
                Err(e) => ui::print_error(&e),
            }
        }
    }

    fn show_history(&self) {
        if self.config.clear_screen {
            ui::clear_screen();
        }

        println!("CALCULATION HISTORY:");
        ui::print_divider();

        if self.history.is_empty() {
            ui::print_info("No calculation history available.");
        } else {
            for (i, entry) in self.history.all().iter().enumerate() {
                let status = if entry.success { "✓" } else { "✗" };
                let time = entry
                    .timestamp
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "--:--:--".to_string());
                print!("{}. [{status}] {time}: {} = ", i + 1, entry.expression);
                match entry.result {
                    Some(result) => {
                        println!("{}", engine::format_result(result, self.config.precision));
                    }
                    None => println!("Error: {}", entry.error.as_deref().unwrap_or("unknown")),
                }
            }

            let stats = self.history.statistics();
            println!();
            ui::print_divider();
            println!(
                "Total: {} | Successful: {} | Failed: {}",
                stats.total, stats.successful, stats.failed
            );
            if let Some(op) = &stats.most_used_operation {
                println!("Most used operation: {op}");
            }
        }

        ui::print_divider();
        ui::press_enter_to_continue();
    }

    fn show_settings(&self) {
        if self.config.clear_screen {
            ui::clear_screen();
        }

        println!("SETTINGS:");
        ui::print_divider();
        println!("1. Precision: {} decimal places", self.config.precision);
        println!("2. Save history: {}", self.config.save_history);
        println!("3. Auto-save: {}", self.config.auto_save);
        println!("4. Clear screen: {}", self.config.clear_screen);
        println!("5. Confirm exit: {}", self.config.confirm_exit);
        ui::print_divider();
        ui::print_info("Settings modification is not available yet.");
        ui::press_enter_to_continue();
    }

    /// Ask for confirmation when the config demands it.
    fn confirm_exit(&self) -> Result<bool> {
        if !self.config.confirm_exit {
            return Ok(true);
        }

        Ok(Confirm::new()
            .with_prompt("Are you sure you want to exit?")
            .default(true)
            .interact()?)
    }

    /// Persist state on the way out; failures are logged, not fatal.
    fn shutdown(&mut self) {
        if self.config.auto_save {
            if self.config.save_history {
                if let Err(e) = self.history.save() {
                    warn!(error = %e, "failed to save history on exit");
                }
            }
            if let Err(e) = self.config.save() {
                warn!(error = %e, "failed to save config on exit");
            }
        }

        println!("\nThank you for using {}!", crate::APP_NAME);
    }
}

/// Build the human-readable expression recorded in history.
fn build_expression(operation: Operation, operands: &[f64]) -> String {
    match operation {
        Operation::SquareRoot => format!("√{:.2}", operands[0]),
        Operation::Factorial => format!("{:.0}!", operands[0]),
        _ if operands.len() >= 2 => format!(
            "{:.2} {} {:.2}",
            operands[0],
            operation.symbol(),
            operands[1]
        ),
        _ => format!("{}({:?})", operation.name(), operands),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_expression_binary() {
        assert_eq!(
            build_expression(Operation::Addition, &[10.0, 5.0]),
            "10.00 + 5.00"
        );
        assert_eq!(
            build_expression(Operation::Division, &[1.0, 3.0]),
            "1.00 / 3.00"
        );
    }

    #[test]
    fn test_build_expression_unary() {
        assert_eq!(build_expression(Operation::SquareRoot, &[16.0]), "√16.00");
        assert_eq!(build_expression(Operation::Factorial, &[5.0]), "5!");
    }

    #[test]
    fn test_build_expression_single_variadic() {
        assert_eq!(
            build_expression(Operation::Addition, &[7.0]),
            "Addition([7.0])"
        );
    }
}
