use clap::{Parser, Subcommand};
use std::fs;
use tsunagu::prelude::*;
use tsunagu::workflow::template;

/// A workflow graph adapter CLI: validate, encode, decode and preview
/// workflow graphs from the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a graph JSON file and print every finding
    Validate {
        /// Path to the graph JSON file ({nodes, edges})
        graph_path: String,
    },
    /// Encode a graph JSON file into the backend workflow JSON
    Encode {
        /// Path to the graph JSON file ({nodes, edges})
        graph_path: String,
        /// Workflow name
        #[arg(short, long, default_value = "Untitled Workflow")]
        name: String,
        /// Workflow description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Workflow tags
        #[arg(short, long)]
        tags: Vec<String>,
    },
    /// Decode a backend workflow JSON file into a graph JSON
    Decode {
        /// Path to the workflow JSON file
        workflow_path: String,
    },
    /// Print the best-effort execution-order preview for a graph
    Order {
        /// Path to the graph JSON file ({nodes, edges})
        graph_path: String,
    },
    /// List the built-in templates
    Templates,
    /// Print a built-in template graph as JSON
    Template {
        /// Template id (see `templates`)
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { graph_path } => {
            let graph = load_graph(&graph_path);
            let report = validate(&graph.nodes, &graph.edges);
            if report.is_valid() {
                println!("Graph is valid ({} nodes, {} edges)", graph.nodes.len(), graph.edges.len());
            } else {
                for message in report.messages() {
                    eprintln!("error: {}", message);
                }
                std::process::exit(1);
            }
        }
        Command::Encode {
            graph_path,
            name,
            description,
            tags,
        } => {
            let graph = load_graph(&graph_path);
            let report = validate(&graph.nodes, &graph.edges);
            if !report.is_valid() {
                for message in report.messages() {
                    eprintln!("error: {}", message);
                }
                exit_with_error("Refusing to encode an invalid graph");
            }
            let meta = WorkflowMeta::new(name, description).with_tags(tags);
            let workflow = encode(&graph.nodes, &graph.edges, meta);
            let json = workflow
                .to_json()
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("{}", json);
        }
        Command::Decode { workflow_path } => {
            let json = fs::read_to_string(&workflow_path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read '{}': {}", workflow_path, e))
            });
            let workflow = WorkflowDefinition::from_json(&json)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            let report = validate_workflow(&workflow);
            if !report.is_valid() {
                for message in report.messages() {
                    eprintln!("error: {}", message);
                }
                std::process::exit(1);
            }
            let graph = decode(&workflow);
            print_graph(&graph);
        }
        Command::Order { graph_path } => {
            let graph = load_graph(&graph_path);
            for id in execution_order(&graph.nodes, &graph.edges) {
                println!("{}", id);
            }
        }
        Command::Templates => {
            for t in template::builtin() {
                println!("{:<20} {} - {}", t.id, t.name, t.description);
            }
        }
        Command::Template { id } => {
            let t = template::find(&id)
                .unwrap_or_else(|| exit_with_error(&format!("No template with id '{}'", id)));
            print_graph(&t.graph);
        }
    }
}

fn load_graph(path: &str) -> WorkflowGraph {
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read '{}': {}", path, e)));
    serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph JSON: {}", e)))
}

fn print_graph(graph: &WorkflowGraph) {
    let json = serde_json::to_string_pretty(graph)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize graph: {}", e)));
    println!("{}", json);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
