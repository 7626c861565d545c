mod quarter_turn;

pub use quarter_turn::RotateQuarterTurn;
