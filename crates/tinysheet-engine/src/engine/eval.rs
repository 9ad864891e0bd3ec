//! On-demand, memoised evaluation over the cell graph.
//!
//! Each cell moves through `Unvisited -> Evaluating -> Evaluated` once per
//! recompute pass. Re-entering a cell that is still `Evaluating` means the
//! formulas form a cycle: that cell is immediately marked `CYCLE`, and every
//! caller further up the DFS stack sees a reference to an errored cell and
//! inherits the error.

use tracing::debug;

use super::cell::EvalRecord;
use super::cell_ref::CellRef;
use super::error::ErrorKind;
use super::grid::Grid;
use super::parser::{Resolve, parse_expression, parse_literal};

/// [`Resolve`] implementation that evaluates referenced cells in a grid.
pub struct GridResolver<'g> {
    grid: &'g mut Grid,
}

impl<'g> GridResolver<'g> {
    pub fn new(grid: &'g mut Grid) -> Self {
        GridResolver { grid }
    }
}

impl Resolve for GridResolver<'_> {
    fn resolve(&mut self, at: CellRef) -> Result<f64, ErrorKind> {
        cell_result(self.grid, at)
    }
}

/// Start a new recompute pass: every cell becomes unvisited.
pub fn reset_eval(grid: &mut Grid) {
    for cell in grid.iter_mut() {
        cell.eval = EvalRecord::default();
    }
}

/// Evaluate a cell (and, transitively, whatever it references) and return its
/// value. Errored cells return 0.0; the error is left on the cell's record.
pub fn eval_cell(grid: &mut Grid, at: CellRef) -> f64 {
    let record = grid.get(at).eval;
    if record.evaluated {
        return record.value;
    }
    if record.evaluating {
        let eval = &mut grid.get_mut(at).eval;
        eval.value = 0.0;
        eval.error = Some(ErrorKind::Cycle);
        eval.evaluated = true;
        return 0.0;
    }

    {
        let eval = &mut grid.get_mut(at).eval;
        eval.evaluating = true;
        eval.error = None;
    }

    let outcome = evaluate_text(grid, at);

    let eval = &mut grid.get_mut(at).eval;
    match outcome {
        Ok(value) => {
            eval.value = value;
            eval.error = None;
        }
        Err(err) => {
            eval.value = 0.0;
            eval.error = Some(err);
        }
    }
    eval.evaluated = true;
    eval.evaluating = false;
    eval.value
}

/// Evaluate a cell and return its outcome as a result.
pub fn cell_result(grid: &mut Grid, at: CellRef) -> Result<f64, ErrorKind> {
    eval_cell(grid, at);
    grid.get(at).result()
}

/// Reset every record and evaluate the whole grid in row-major order.
pub fn recompute(grid: &mut Grid) {
    reset_eval(grid);
    let refs: Vec<CellRef> = grid.iter().map(|(at, _)| at).collect();
    let errors = refs
        .into_iter()
        .filter(|at| cell_result(grid, *at).is_err())
        .count();
    debug!(errors, "recompute pass finished");
}

fn evaluate_text(grid: &mut Grid, at: CellRef) -> Result<f64, ErrorKind> {
    let cell = grid.get(at);
    if let Some(formula) = cell.formula() {
        let formula = formula.to_owned();
        return parse_expression(&formula, &mut GridResolver::new(grid));
    }
    if cell.is_empty() {
        return Ok(0.0);
    }
    // Non-numeric literal text displays verbatim and counts as zero.
    Ok(parse_literal(cell.text()).unwrap_or(0.0))
}
