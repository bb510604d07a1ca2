use metropolis_rs::prelude::*;
use metropolis_rs::rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rng::rand_from_seed(0);
    let mut model = MolecularDynamics::new("MolecularDynamics", 100, 1_f64)?;

    let mut mc = MonteCarlo::new(&mut model, &mut rng)?;
    mc.evolve(10_000)?;

    let pressure = model.observable();
    println!("Number of steps: {}", pressure.steps());
    println!("Sum of weights : {}", pressure.w());
    println!("Sum of weights2: {}", pressure.w2());
    println!(
        "Value          : {} \u{00B1} {}",
        pressure.value(),
        pressure.value_err()
    );
    Ok(())
}
