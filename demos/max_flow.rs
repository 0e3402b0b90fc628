use augmenting_paths::loader::read_directed;
use augmenting_paths::maximum_flow::{DirectedGraph, EdmondsKarp};
use augmenting_paths::status::Status;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("usage: {} <graph file> <source> <sink>", args[0]);
        return ExitCode::FAILURE;
    }
    let (Ok(source), Ok(sink)) = (args[2].parse::<usize>(), args[3].parse::<usize>()) else {
        eprintln!("source and sink must be vertex ids");
        return ExitCode::FAILURE;
    };

    let result = read_directed::<f64, _>(&args[1]).and_then(|graph: DirectedGraph<f64>| EdmondsKarp::new(&graph, source, sink));
    let mut solver = match result {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match solver.solve() {
        Status::Optimal => {
            println!("{:?}", solver.flow_value());
            ExitCode::SUCCESS
        }
        _ => unreachable!(),
    }
}
