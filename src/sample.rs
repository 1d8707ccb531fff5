//! Demo seat fields: a random hall and a small fixed preview column.

use crate::config::{SampleConfig, PREVIEW_PRICE, SAMPLE_INFO};
use crate::error::Result;
use crate::model::{Seat, SeatField, SeatStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Fill every cell of a `rows x columns` grid with a random seat.
///
/// Statuses are drawn uniformly from ordered, issued, not-available, free
/// and empty. Seats start unselected. Display numbering follows the grid.
pub fn random_field(config: &SampleConfig) -> Result<SeatField> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let capacity = config.rows as usize * config.columns as usize;
    let mut seats = Vec::with_capacity(capacity);

    for y in 0..config.rows {
        for x in 0..config.columns {
            let status = match rng.gen_range(0..5) {
                0 => SeatStatus::Ordered,
                1 => SeatStatus::Issued,
                2 => SeatStatus::NotAvailable,
                3 => SeatStatus::Free,
                _ => SeatStatus::Empty,
            };
            let price = if config.max_price == 0 {
                0.0
            } else {
                rng.gen_range(0..config.max_price) as f64
            };
            seats.push(
                Seat::new(x as i32, y as i32, y + 1, x + 1, price, status)
                    .with_info(config.info.clone()),
            );
        }
    }

    debug!(seed = ?config.seed, "Generated {} random seat(s)", seats.len());

    SeatField::new(config.rows, config.columns, seats)
}

/// Fixed nine-seat column used for previews: three free, four issued, two
/// not available, in grid rows 1 through 9.
pub fn preview_field() -> Result<SeatField> {
    let statuses = [
        SeatStatus::Free,
        SeatStatus::Free,
        SeatStatus::Free,
        SeatStatus::Issued,
        SeatStatus::Issued,
        SeatStatus::Issued,
        SeatStatus::Issued,
        SeatStatus::NotAvailable,
        SeatStatus::NotAvailable,
    ];

    let seats = statuses
        .iter()
        .enumerate()
        .map(|(i, &status)| {
            let y = i as u32 + 1;
            Seat::new(0, y as i32, y, 1, PREVIEW_PRICE, status).with_info(SAMPLE_INFO)
        })
        .collect();

    SeatField::new(statuses.len() as u32 + 1, 1, seats)
}
