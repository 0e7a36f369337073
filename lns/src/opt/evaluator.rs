use anyhow::Result;
use strippack::entities::{Item, Layout, Strip};
use strippack::placement::bl_pack;

/// A layout together with its fitness
#[derive(Debug, Clone)]
pub struct ScoredLayout {
    pub layout: Layout,
    pub fitness: f32,
}

impl ScoredLayout {
    /// The placed items, in the order they were placed
    pub fn sequence(&self) -> &[Item] {
        self.layout.placed_items()
    }
}

/// Packs candidate sequences into the strip and keeps count of how many were evaluated.
#[derive(Debug, Clone)]
pub struct Evaluator {
    pub strip: Strip,
    pub n_evals: usize,
}

impl Evaluator {
    pub fn new(strip: Strip) -> Self {
        Self { strip, n_evals: 0 }
    }

    pub fn evaluate(&mut self, items: &[Item]) -> Result<ScoredLayout> {
        self.n_evals += 1;
        let layout = bl_pack(items, self.strip)?;
        let fitness = layout.fitness();
        Ok(ScoredLayout { layout, fitness })
    }
}
