use delivery_routing::graph::city::{city_network, DEPOT};
use delivery_routing::routing::build_route;
use std::env;
use std::process::ExitCode;

fn usage() -> ExitCode {
    eprintln!("usage: plan_route [--start NODE] STOP...");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    env_logger::init();

    let mut start = DEPOT;
    let mut stops: Vec<usize> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let value = if arg == "--start" {
            match args.next().map(|value| value.parse()) {
                Some(Ok(node)) => {
                    start = node;
                    continue;
                }
                _ => return usage(),
            }
        } else {
            arg.parse()
        };

        match value {
            Ok(stop) => stops.push(stop),
            Err(_) => return usage(),
        }
    }

    if stops.is_empty() {
        println!("No delivery stops given; nothing to route.");
        return usage();
    }

    let network = match city_network() {
        Ok(network) => network,
        Err(err) => {
            eprintln!("failed to load road network: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match build_route(&network, start, &stops) {
        Ok(route) => {
            println!("Starting from warehouse (node {})", start);
            for leg in &route.legs {
                let hops: Vec<String> = leg.path.iter().map(|node| node.to_string()).collect();
                println!("  {:>4} -> {:<4} {:>6}  {}", leg.from, leg.to, leg.distance, hops.join(" -> "));
            }
            println!("Visit order: {:?}", route.visit_order);
            println!("Total delivery distance: {}", route.total_distance);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("could not plan route: {}", err);
            ExitCode::FAILURE
        }
    }
}
