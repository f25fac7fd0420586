//! Navigation state for one user session
//!
//! A session owns the matrix being entered and at most one decomposition
//! run. Running a new decomposition replaces the previous one wholesale.

use crate::random::random_matrix;
use lustep_core::{
    decompose, example_matrix, Decomposition, LuError, Matrix, MatrixInput, Result, Step,
};
use rand::Rng;
use tracing::{debug, info};

/// Which panel is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Input,
    Visualization,
    Result,
}

/// Matrix input plus the current decomposition and step cursor
#[derive(Debug, Clone, Default)]
pub struct Session {
    input: MatrixInput,
    run: Option<Decomposition>,
    index: usize,
    view: View,
}

impl Session {
    /// Session with a zero-filled matrix of the given size
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            input: MatrixInput::new(size)?,
            ..Self::default()
        })
    }

    /// Session whose input is already filled in
    pub fn with_matrix(matrix: Matrix) -> Result<Self> {
        let mut session = Self::default();
        session.input.set_matrix(matrix)?;
        Ok(session)
    }

    /// Current input size
    pub fn size(&self) -> usize {
        self.input.size()
    }

    /// The matrix being entered
    pub fn matrix(&self) -> &Matrix {
        self.input.matrix()
    }

    /// Change size, zero the input and drop any run
    pub fn set_size(&mut self, size: usize) -> Result<()> {
        self.input.resize(size)?;
        self.reset();
        Ok(())
    }

    /// Edit one input cell; unparseable text is ignored
    pub fn set_cell(&mut self, row: usize, col: usize, text: &str) -> Result<bool> {
        self.input.set_cell(row, col, text)
    }

    /// Replace the input with the example for the current size
    pub fn use_example(&mut self) {
        self.input = input_for(example_matrix(self.size()), &self.input);
    }

    /// Replace the input with a random integer matrix of the current size
    pub fn use_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.input = input_for(random_matrix(self.size(), rng), &self.input);
    }

    /// Run the decomposition on the current input
    ///
    /// Moves to the first step and the visualization view.
    pub fn decompose(&mut self) -> &Decomposition {
        let run = decompose(self.input.matrix());
        info!(
            size = self.size(),
            steps = run.len(),
            skipped = run.skipped_pivots().len(),
            "decomposition complete"
        );
        self.index = 0;
        self.view = View::Visualization;
        self.run.insert(run)
    }

    /// Discard the run and go back to input
    pub fn reset(&mut self) {
        if self.run.take().is_some() {
            debug!("decomposition discarded");
        }
        self.index = 0;
        self.view = View::Input;
    }

    /// Current run, if any
    pub fn decomposition(&self) -> Option<&Decomposition> {
        self.run.as_ref()
    }

    /// Index of the step being shown
    pub fn current_index(&self) -> Option<usize> {
        self.run.as_ref().map(|_| self.index)
    }

    /// Step being shown
    pub fn current_step(&self) -> Option<&Step> {
        self.run.as_ref().and_then(|run| run.get(self.index))
    }

    /// Number of recorded steps, 0 without a run
    pub fn total_steps(&self) -> usize {
        self.run.as_ref().map_or(0, Decomposition::len)
    }

    /// Advance one step; false at the last step or without a run
    pub fn next_step(&mut self) -> bool {
        if self.index + 1 < self.total_steps() {
            self.index += 1;
            debug!(index = self.index, "next step");
            true
        } else {
            false
        }
    }

    /// Go back one step; false at the first step or without a run
    pub fn prev_step(&mut self) -> bool {
        if self.run.is_some() && self.index > 0 {
            self.index -= 1;
            debug!(index = self.index, "previous step");
            true
        } else {
            false
        }
    }

    /// Jump to a step by index
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        let len = self.total_steps();
        if self.run.is_none() {
            return Err(LuError::NoDecomposition);
        }
        if index >= len {
            return Err(LuError::StepOutOfRange { index, len });
        }
        self.index = index;
        Ok(())
    }

    /// Active view
    pub fn view(&self) -> View {
        self.view
    }

    /// Switch view; visualization and result need a run
    pub fn select_view(&mut self, view: View) -> Result<()> {
        if view != View::Input && self.run.is_none() {
            return Err(LuError::NoDecomposition);
        }
        self.view = view;
        Ok(())
    }

    /// Progress through the steps in percent
    pub fn progress(&self) -> Option<u8> {
        self.current_index()
            .map(|index| crate::render::progress_percent(index, self.total_steps()))
    }
}

fn input_for(matrix: Matrix, previous: &MatrixInput) -> MatrixInput {
    let mut input = previous.clone();
    // Generated matrices always match the current size
    if input.set_matrix(matrix).is_err() {
        debug!("generated matrix rejected");
    }
    input
}
