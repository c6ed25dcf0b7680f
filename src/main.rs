use std::path::PathBuf;

use kruskal_trace::config::{init_dotenv, TraceConfig};
use kruskal_trace::{load_graph, AppError, KruskalEngine, TreeGoal};
use log::info;

const USAGE: &str = "Uso: kruskal-trace run [--graph <FILE>] [--min|--max] [--step <N>] [--summary]";

/// Opciones de `run` ya parseadas.
#[derive(Debug, Default)]
struct RunArgs {
    graph: Option<PathBuf>,
    goal: Option<TreeGoal>,
    step: Option<usize>,
    summary: bool,
}

fn parse_run_args(args: &[String]) -> Result<RunArgs, String> {
    let mut out = RunArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--graph" => {
                i += 1;
                let path = args.get(i).ok_or("--graph requiere un valor")?;
                out.graph = Some(PathBuf::from(path));
            }
            "--max" => out.goal = Some(TreeGoal::Maximum),
            "--min" => out.goal = Some(TreeGoal::Minimum),
            "--step" => {
                i += 1;
                let raw = args.get(i).ok_or("--step requiere un valor")?;
                out.step = Some(raw.parse::<usize>().map_err(|e| format!("--step inválido '{raw}': {e}"))?);
            }
            "--summary" => out.summary = true,
            other => return Err(format!("argumento desconocido: {other}")),
        }
        i += 1;
    }
    Ok(out)
}

fn execute(args: RunArgs, cfg: TraceConfig) -> Result<String, AppError> {
    let path = args.graph
                   .or(cfg.graph_path)
                   .ok_or_else(|| AppError::Config("falta --graph (o KRUSKAL_GRAPH)".into()))?;
    let goal = args.goal.unwrap_or(cfg.goal);

    let graph = load_graph(&path)?;
    let mut engine = KruskalEngine::new();
    let mut history = engine.run_graph(&graph, goal)?;
    info!("trace ready path={} steps={} fingerprint={}",
          path.display(),
          history.len(),
          history.fingerprint());

    let out = if args.summary {
        serde_json::to_string_pretty(&history.summary())?
    } else if let Some(n) = args.step {
        history.seek(n);
        serde_json::to_string_pretty(history.current())?
    } else {
        serde_json::to_string_pretty(&history)?
    };
    Ok(out)
}

fn main() {
    init_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args[1] != "run" {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let run_args = match parse_run_args(&args[2..]) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("[kruskal-trace] {msg}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    let cfg = match TraceConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[kruskal-trace] {e}");
            std::process::exit(e.exit_code());
        }
    };

    match execute(run_args, cfg) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("[kruskal-trace] {e}");
            std::process::exit(e.exit_code());
        }
    }
}
