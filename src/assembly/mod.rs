//! Per-carrier route assembly.
//!
//! Stitches connecting legs and delivery legs into one continuous action
//! sequence with pickup and dropoff markers.

mod assembler;

pub use assembler::RouteAssembler;
