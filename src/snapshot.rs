use crate::simulation::{Model, Tick};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub vulnerable: usize,
    pub infected: usize,
    pub immune: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
}

/// Everything a renderer reads from one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub time: Tick,
    pub complete: bool,
    pub counts: Counts,
    pub cells: Vec<CellView>,
}

impl Snapshot {
    pub fn new(model: &Model) -> Snapshot {
        Snapshot {
            time: model.time(),
            complete: model.is_complete(),
            counts: model.counts(),
            cells: model
                .population()
                .iter()
                .map(|cell| CellView {
                    x: cell.location.x,
                    y: cell.location.y,
                    color: cell.color().name(),
                })
                .collect(),
        }
    }
}
