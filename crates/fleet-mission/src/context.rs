//! Mission context: the pending command sequence plus the active strategy.

use uuid::Uuid;

use tracing::{debug, error, info};

use crate::command::Command;
use crate::error::MissionError;
use crate::strategy::{FlightReport, FlightStrategy};

/// Owns one mission leg: an ordered command sequence and the strategy that
/// will run it.
///
/// The sequence is cleared after every [`execute`](Self::execute) call,
/// whatever the outcome, so a context can be reused leg after leg. One
/// context per physical drone; contexts are independent and impose no
/// ordering on each other.
#[derive(Debug)]
pub struct MissionContext {
    mission_id: Uuid,
    strategy: Option<FlightStrategy>,
    commands: Vec<Command>,
}

impl Default for MissionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MissionContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mission_id: Uuid::new_v4(),
            strategy: None,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_strategy(strategy: FlightStrategy) -> Self {
        let mut ctx = Self::new();
        ctx.strategy = Some(strategy);
        ctx
    }

    #[must_use]
    pub const fn mission_id(&self) -> Uuid {
        self.mission_id
    }

    /// Append a command to the pending sequence. No dedup; order is the
    /// execution order.
    pub fn add_command(&mut self, command: Command) {
        debug!(mission_id = %self.mission_id, command = %command, "command queued");
        self.commands.push(command);
    }

    /// Replace the active strategy. Last write wins; switching mid-mission
    /// only affects the next `execute` call.
    pub fn set_strategy(&mut self, strategy: FlightStrategy) {
        self.strategy = Some(strategy);
    }

    /// Number of commands currently pending.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.commands.len()
    }

    /// Hand the pending sequence to the active strategy.
    ///
    /// The sequence is cleared unconditionally, even when no strategy is
    /// installed or the flight reported failures: after this call the
    /// context is always empty and ready for the next leg.
    ///
    /// # Errors
    ///
    /// `NoStrategy` if no strategy has been installed.
    pub async fn execute(&mut self) -> Result<FlightReport, MissionError> {
        let commands = std::mem::take(&mut self.commands);

        let Some(strategy) = self.strategy else {
            error!(mission_id = %self.mission_id, "execute called with no strategy installed");
            return Err(MissionError::NoStrategy);
        };

        info!(
            mission_id = %self.mission_id,
            strategy = ?strategy,
            commands = commands.len(),
            "executing mission leg"
        );
        Ok(strategy.run(&commands).await)
    }
}
