/// Fixed surcharge added to every booking, in currency units.
pub const SERVICE_FEE: f64 = 1200.0;

/// Total owed for a booking. A NaN guest count (non-numeric entry) yields a
/// NaN total until validation catches it.
pub fn total(unit_price: f64, guest_size: f64) -> f64 {
    unit_price * guest_size + SERVICE_FEE
}

/// Line items for the price summary shown before submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    pub unit_price: f64,
    pub guest_size: f64,
    pub service_fee: f64,
    pub total: f64,
}

impl Breakdown {
    pub fn new(unit_price: f64, guest_size: f64) -> Self {
        Self {
            unit_price,
            guest_size,
            service_fee: SERVICE_FEE,
            total: total(unit_price, guest_size),
        }
    }
}
