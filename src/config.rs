use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
/// `BOARD_SIZE` as an index bound.
pub const GRID_SIZE: usize = BOARD_SIZE as usize;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Ship lengths of the standard fleet, in `SHIPS` order.
pub const FLEET_LENGTHS: [usize; NUM_SHIPS] = fleet_lengths(&SHIPS);

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = total_cells(&FLEET_LENGTHS);

const fn fleet_lengths(ships: &[ShipType; NUM_SHIPS]) -> [usize; NUM_SHIPS] {
    let mut lengths = [0; NUM_SHIPS];
    let mut i = 0;
    while i < NUM_SHIPS {
        lengths[i] = ships[i].length();
        i += 1;
    }
    lengths
}

const fn total_cells(lengths: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < lengths.len() {
        total += lengths[i];
        i += 1;
    }
    total
}
