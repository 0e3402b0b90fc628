use augmenting_paths::loader::read_undirected;
use augmenting_paths::maximum_matching::maximum_matching;
use augmenting_paths::GraphError;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: {} <graph file>", args[0]);
        return ExitCode::FAILURE;
    }

    match read_undirected(&args[1]).and_then(|graph| maximum_matching(&graph)) {
        Ok(matching) => {
            println!("{}", matching.size);
            let edges: Vec<String> = matching.edges().iter().map(|(u, v)| format!("{}-{}", u, v)).collect();
            if !edges.is_empty() {
                println!("{}", edges.join(", "));
            }
            ExitCode::SUCCESS
        }
        Err(GraphError::NotBipartite) => {
            eprintln!("error: the graph is not bipartite");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
