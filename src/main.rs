use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;
use std::error::Error;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use vcgraph::{
    graph::{Graph, GraphStore},
    io::{load_edge_list, write_gml, write_graphml, write_plain},
    tasks::{Degree, PageRank},
    vertex_centric::{ComputeTask, EngineConfig, VertexCentric},
};

fn load_graph(matches: &ArgMatches) -> Result<GraphStore, Box<dyn Error>> {
    let mut graph = GraphStore::from(load_edge_list(matches.value_of("GRAPH").unwrap())?);
    if matches.is_present("expand") || matches.is_present("materialize-both") {
        let time_now = std::time::Instant::now();
        graph.expand(matches.is_present("materialize-both"));
        info!("expand_time: {}", time_now.elapsed().as_millis());
    }
    Ok(graph)
}

fn parse_usize(matches: &ArgMatches, name: &str) -> Result<Option<usize>, Box<dyn Error>> {
    Ok(match matches.value_of(name) {
        Some(value) => Some(value.parse()?),
        None => None,
    })
}

fn engine_config(matches: &ArgMatches) -> Result<EngineConfig, Box<dyn Error>> {
    let mut config = EngineConfig::new();
    if let Some(num_workers) = parse_usize(matches, "workers")? {
        config = config.num_workers(num_workers);
    }
    if let Some(max_supersteps) = parse_usize(matches, "max-supersteps")? {
        config = config.max_supersteps(max_supersteps);
    }
    Ok(config)
}

fn run_task<V, T>(
    graph: &GraphStore,
    config: EngineConfig,
    task: &T,
    matches: &ArgMatches,
) -> Result<(), Box<dyn Error>>
where
    V: Clone + Send + Sync + Display,
    T: ComputeTask<V>,
{
    let mut engine = VertexCentric::with_config(graph, config)?;
    let stats = engine.run(task)?;
    info!("supersteps: {}", stats.supersteps());
    let values = engine.values(task.name())?;
    let mut writer: Box<dyn Write> = match matches.value_of("output") {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout()),
    };
    match matches.value_of("format").unwrap() {
        "gml" => write_gml(graph, task.name(), values, &mut writer)?,
        "graphml" => write_graphml(graph, task.name(), values, &mut writer)?,
        _ => write_plain(values, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

fn handle_info(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(matches)?;
    println!("{}", graph.info());
    if matches.is_present("verbose") {
        println!("{}", graph);
    }
    Ok(())
}

fn handle_run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(matches)?;
    let config = engine_config(matches)?;
    match matches.value_of("task").unwrap() {
        "pagerank" => {
            let iterations = parse_usize(matches, "iterations")?.unwrap_or(20);
            let task = PageRank::new(iterations)
                .undirected(matches.is_present("undirected"));
            run_task::<f64, _>(&graph, config, &task, matches)
        }
        _ => run_task::<usize, _>(&graph, config, &Degree::new(), matches),
    }
}

fn graph_args<'a, 'b>(subcommand: App<'a, 'b>) -> App<'a, 'b> {
    subcommand
        .arg(
            Arg::with_name("GRAPH")
                .help("Edge-list file")
                .required(true),
        )
        .arg(
            Arg::with_name("expand")
                .long("expand")
                .help("Materializes the neighbor lists before running"),
        )
        .arg(
            Arg::with_name("materialize-both")
                .long("materialize-both")
                .help("Expands and also materializes the merged in/out lists"),
        )
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("vcgraph")
        .about("Vertex-centric computation over condensed graphs")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(graph_args(
            SubCommand::with_name("info")
                .about("Prints the size of a graph")
                .arg(
                    Arg::with_name("verbose")
                        .short("v")
                        .help("Prints every vertex"),
                ),
        ))
        .subcommand(graph_args(
            SubCommand::with_name("run")
                .about("Runs a task and writes the per-vertex results")
                .arg(
                    Arg::with_name("task")
                        .long("task")
                        .takes_value(true)
                        .possible_values(&["degree", "pagerank"])
                        .default_value("degree"),
                )
                .arg(Arg::with_name("workers").long("workers").takes_value(true))
                .arg(
                    Arg::with_name("max-supersteps")
                        .long("max-supersteps")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("iterations")
                        .long("iterations")
                        .takes_value(true),
                )
                .arg(Arg::with_name("undirected").long("undirected"))
                .arg(
                    Arg::with_name("format")
                        .long("format")
                        .takes_value(true)
                        .possible_values(&["plain", "gml", "graphml"])
                        .default_value("plain"),
                )
                .arg(
                    Arg::with_name("output")
                        .short("o")
                        .long("output")
                        .takes_value(true),
                ),
        ))
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("info") {
        handle_info(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("run") {
        handle_run(matches)?;
    }
    Ok(())
}
