use varstruct::{
    assign::{Assign, Checked},
    prelude::*,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Meters(f64);

pub struct Feet(f64);

impl Assign<Meters> for Feet {
    type Safety = Checked;

    fn assign(self) -> Option<Meters> {
        Some(Meters(self.0 * 0.3048))
    }
}

#[varstruct(fields(field(ident = "height", value = "Meters")))]
#[derive(Debug)]
pub struct Tower {}

fn main() {
    let mut tower = Tower::default();

    assert!(tower.set::<{ id!("height") }, _>(Feet(10.0)));
    assert!(tower.is_set::<{ id!("height") }, _>());
}
