//! Walk through the decomposition of each built-in example matrix

use lustep::{decompose, example_matrix, render_result, render_step, RenderConfig};

fn main() {
    let config = RenderConfig::default();

    for n in 2..=5 {
        let a = example_matrix(n);
        let run = decompose(&a);

        println!("==== {n} x {n} example ====");
        println!(
            "{} steps, {} eliminations",
            run.len(),
            run.eliminations()
        );

        for (index, step) in run.steps().iter().enumerate() {
            println!("\n{}", render_step(step, index, run.len(), &config));
        }

        println!("\n{}\n", render_result(&run, &config));
    }
}
