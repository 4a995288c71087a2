//! Entry point for the mirrored per-module unit test tree under `tests/unit/`.

mod analysis;
mod io;
mod symmetry;
mod tile;
mod voting;
