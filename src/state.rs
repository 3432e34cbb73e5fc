use crate::data::Pos;

/// The movable part of a level.
///
/// Boxes keep the order they were loaded in (row-major) so a box can be
/// followed across moves by its index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub player_pos: Pos,
    pub boxes: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, boxes: Vec<Pos>) -> State {
        State { player_pos, boxes }
    }
}
