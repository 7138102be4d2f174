//! GraphAlgo CLI 工具
//!
//! 从 JSON 图描述文件加载图并运行算法

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use graphalgo::graph::{Direction, GraphCatalog, GraphStore};
use graphalgo::{
    BellmanFord, BellmanFordOutcome, Connectivity, Dijkstra, EdmondsKarp, FordFulkerson,
    ShortestPaths, Traversal,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphalgo-cli")]
#[command(about = "GraphAlgo 图算法命令行工具")]
struct Args {
    /// 图描述文件路径
    #[arg(short, long, default_value = "matrice.json")]
    input: PathBuf,

    /// 只处理指定 id 的图（默认处理全部）
    #[arg(short, long)]
    graph: Option<String>,

    /// 要运行的算法
    #[arg(short, long, value_enum, default_value = "traversal")]
    algorithm: Algorithm,

    /// 起点 / 源点（默认遍历所有节点）
    #[arg(short, long)]
    source: Option<String>,

    /// 汇点（最大流必填）
    #[arg(short = 't', long)]
    sink: Option<String>,

    /// Dijkstra 使用无向视图（插入对称边）
    #[arg(short, long)]
    undirected: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// DFS + BFS + 环检测 + 连通分量
    Traversal,
    Bfs,
    Dfs,
    Cycle,
    Components,
    Dijkstra,
    BellmanFord,
    FordFulkerson,
    EdmondsKarp,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("无效的日志级别")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = GraphCatalog::load(&args.input)
        .with_context(|| format!("加载图描述失败: {:?}", args.input))?;

    let selected: Vec<(&str, &GraphStore<String>)> = match &args.graph {
        Some(name) => vec![(name.as_str(), catalog.get(name)?)],
        None => catalog.iter().collect(),
    };

    for (id, store) in selected {
        println!("\n***** 图: {} *****\n", id);
        run(&args, store)?;
    }

    Ok(())
}

fn run(args: &Args, store: &GraphStore<String>) -> anyhow::Result<()> {
    match args.algorithm {
        Algorithm::Traversal => {
            run_dfs(args, store)?;
            run_bfs(args, store)?;
            run_cycle(store);
            run_components(store);
        }
        Algorithm::Bfs => run_bfs(args, store)?,
        Algorithm::Dfs => run_dfs(args, store)?,
        Algorithm::Cycle => run_cycle(store),
        Algorithm::Components => run_components(store),
        Algorithm::Dijkstra => {
            let direction = if args.undirected {
                Direction::Undirected
            } else {
                Direction::Directed
            };
            let graph = store.weighted(direction);
            for source in sources(args, store) {
                let paths = Dijkstra::new(&graph).run(&source)?;
                print_paths(&paths);
            }
        }
        Algorithm::BellmanFord => {
            let graph = store.weighted(Direction::Directed);
            for source in sources(args, store) {
                match BellmanFord::from_graph(&graph).run(&source)? {
                    BellmanFordOutcome::Shortest(paths) => print_paths(&paths),
                    BellmanFordOutcome::NegativeCycle => {
                        println!("源点 {}: 存在可达的负权环", source)
                    }
                }
            }
        }
        Algorithm::FordFulkerson | Algorithm::EdmondsKarp => {
            let (Some(source), Some(sink)) = (&args.source, &args.sink) else {
                bail!("最大流需要 --source 和 --sink");
            };
            let capacity = store.capacities()?;
            let (s, t) = (store.index_of(source)?, store.index_of(sink)?);
            let result = if args.algorithm == Algorithm::FordFulkerson {
                FordFulkerson::new(&capacity).max_flow(s, t)?
            } else {
                EdmondsKarp::new(&capacity).max_flow(s, t)?
            };

            println!("最大流 {} -> {}: {}", source, sink, result.value);
            println!("增广次数: {}", result.augmentations);
            for (u, v, c) in result.cut_edges(&capacity) {
                println!("  最小割边: {} -> {} (容量 {})", label(store, u), label(store, v), c);
            }
        }
    }
    Ok(())
}

fn run_dfs(args: &Args, store: &GraphStore<String>) -> anyhow::Result<()> {
    println!("=== DFS ===");
    let graph = store.graph();
    for start in sources(args, store) {
        let order = Traversal::new(&graph).dfs_order(&start)?;
        println!("起点 {}: {:?}", start, order);
    }
    println!();
    Ok(())
}

fn run_bfs(args: &Args, store: &GraphStore<String>) -> anyhow::Result<()> {
    println!("=== BFS ===");
    let graph = store.graph();
    for start in sources(args, store) {
        let order = Traversal::new(&graph).bfs(&start)?;
        println!("起点 {}: {:?}", start, order);
    }
    println!();
    Ok(())
}

fn run_cycle(store: &GraphStore<String>) {
    println!("=== 环检测 ===");
    let graph = store.graph();
    if Connectivity::new(&graph).has_cycle() {
        println!("检测到环\n");
    } else {
        println!("无环\n");
    }
}

fn run_components(store: &GraphStore<String>) {
    println!("=== 连通分量 (BFS) ===");
    let graph = store.graph();
    for (i, component) in Connectivity::new(&graph)
        .connected_components()
        .iter()
        .enumerate()
    {
        let mut sorted = component.clone();
        sorted.sort();
        println!("分量 {}: {:?}", i + 1, sorted);
    }
    println!();
}

fn print_paths(paths: &ShortestPaths<String>) {
    println!("源点 {}:", paths.source());
    for (node, distance) in paths.distances() {
        match paths.path_to(node) {
            Some(path) => println!("  {} 距离 {}: {}", node, distance, path.nodes.join(" -> ")),
            None => println!("  {} 不可达", node),
        }
    }
}

/// 指定的起点，或升序的全部节点
fn sources(args: &Args, store: &GraphStore<String>) -> Vec<String> {
    match &args.source {
        Some(source) => vec![source.clone()],
        None => {
            let mut nodes = store.nodes().to_vec();
            nodes.sort();
            nodes
        }
    }
}

fn label(store: &GraphStore<String>, index: usize) -> String {
    store
        .node_at(index)
        .cloned()
        .unwrap_or_else(|| index.to_string())
}
