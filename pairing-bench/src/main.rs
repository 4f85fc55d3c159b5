use anyhow::{anyhow, Result};
use ark_ec::AffineRepr;
use pairing_bench::{env, G1Affine, G2Affine};
use tracing::debug;

pub fn main() -> Result<()> {
    env::init_console_subscriber().map_err(|e| anyhow!(e))?;
    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();
    debug!(%g1, %g2, "loaded BLS12-381 generators");
    println!("Project initialized with BLS12-381 G1 generator");
    Ok(())
}
