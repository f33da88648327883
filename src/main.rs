use nek_reader::Bounds;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-field-file>", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];

    println!("Reading nek5000 field file: {}", path);
    println!("{}", "=".repeat(60));

    match nek_reader::read(path) {
        Ok(data) => {
            println!("\n{}", "=".repeat(60));
            println!("SUCCESS! Decoding completed.");
            println!("{}", "=".repeat(60));

            println!("\nFile Information:");
            println!("  Time: {}", data.time);
            println!("  Timestep: {}", data.istep);
            println!("  Word size: {} bytes", data.wdsz);
            println!("  Byte order: {:?}", data.endian);

            println!("\nMesh:");
            println!("  Dimensions: {}", data.ndim);
            println!("  Elements: {}", data.nel);
            println!(
                "  Grid per element: {} x {} x {}",
                data.lr1[0], data.lr1[1], data.lr1[2]
            );

            println!("\nField Bounds:");
            print_bounds("geometry", data.var[0], &data.lims.pos);
            print_bounds("velocity", data.var[1], &data.lims.vel);
            print_bounds("pressure", data.var[2], &data.lims.pres);
            print_bounds("temperature", data.var[3], &data.lims.temp);
            print_bounds("scalar", data.var[4], &data.lims.scal);
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read field file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

fn print_bounds(name: &str, ncomp: usize, bounds: &Bounds) {
    if ncomp == 0 {
        println!("  {}: not present", name);
        return;
    }
    for comp in 0..ncomp {
        println!(
            "  {}[{}]: min = {}, max = {}",
            name, comp, bounds.min[comp], bounds.max[comp]
        );
    }
}
