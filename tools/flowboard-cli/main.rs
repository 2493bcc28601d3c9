use clap::{Parser, Subcommand, ValueEnum};
use flowboard::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    Pretty,
    Json,
    Binary,
}

impl From<FormatCli> for ExportFormat {
    fn from(format: FormatCli) -> Self {
        match format {
            FormatCli::Pretty => ExportFormat::PrettyJson,
            FormatCli::Json => ExportFormat::Json,
            FormatCli::Binary => ExportFormat::Binary,
        }
    }
}

/// Drive the workflow canvas editor from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List palette templates, grouped by catalog and category
    Palette {
        /// Only show templates whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Place, connect and delete two blocks, printing each step
    Demo,
    /// Replay a JSON command script and export the resulting workflow
    Replay {
        /// Path to the command script (a JSON array of commands)
        script_path: String,
        /// Optional editor config in TOML
        #[arg(short, long)]
        config: Option<String>,
        /// Export encoding
        #[arg(short, long, value_enum, default_value = "pretty")]
        format: FormatCli,
        /// Write the export here instead of stdout
        #[arg(short, long)]
        out: Option<String>,
        /// Print the outcome of every command
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Palette { search } => run_palette(search.as_deref().unwrap_or("")),
        Command::Demo => run_demo(),
        Command::Replay {
            script_path,
            config,
            format,
            out,
            verbose,
        } => run_replay(&script_path, config.as_deref(), format.into(), out, verbose),
    }
}

fn run_palette(query: &str) {
    let palette = Palette::builtin();
    let groups = palette.grouped(query);
    if groups.is_empty() {
        println!("No templates match '{}'.", query);
        return;
    }

    let mut current_catalog = None;
    for group in groups {
        if current_catalog != Some(group.catalog) {
            println!("\n{}", group.catalog);
            current_catalog = Some(group.catalog);
        }
        println!("  {}", group.category);
        for item in group.items {
            println!("    {:<26} {:<24} {}", item.id, item.name, item.color);
        }
    }
    println!();
}

fn run_demo() {
    let mut editor = CanvasEditor::new();

    println!("--- flowboard demo ---");
    let forecast = place(&mut editor, "demand-forecasting", Point::new(150.0, 120.0));
    let stock = place(&mut editor, "inventory-optimization", Point::new(420.0, 120.0));

    editor
        .start_connection(forecast)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    match editor.click_node(stock) {
        Ok(ClickOutcome::Connected { from, to, .. }) => println!("Connected {} -> {}", from, to),
        Ok(other) => println!("Connection not created: {:?}", other),
        Err(e) => exit_with_error(&e.to_string()),
    }
    println!(
        "Canvas: {} node(s), {} connection(s)",
        editor.nodes().len(),
        editor.edges().len()
    );

    let removed = editor
        .delete_node(forecast)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!(
        "Deleted '{}' and {} connection(s)",
        removed.node.display_name,
        removed.edges.len()
    );
    println!(
        "Canvas: {} node(s), {} connection(s)",
        editor.nodes().len(),
        editor.edges().len()
    );

    let mut sink = WriterSink::new(io::stdout(), ExportFormat::PrettyJson);
    editor
        .run(&mut sink)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
}

fn place(editor: &mut CanvasEditor, template_id: &str, pointer: Point) -> NodeId {
    editor
        .begin_palette_drag_by_id(template_id)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    match editor.drop_on_canvas(pointer) {
        DropOutcome::Placed { node, position } => {
            println!("Dropped '{}' at {} -> placed at {}", template_id, pointer, position);
            node
        }
        DropOutcome::NoTemplateInFlight => exit_with_error("Drop ignored: no template in flight"),
    }
}

fn run_replay(
    script_path: &str,
    config_path: Option<&str>,
    format: ExportFormat,
    out: Option<String>,
    verbose: bool,
) {
    let total_start = Instant::now();

    // --- 1. Loading ---
    let config = match config_path {
        Some(path) => {
            EditorConfig::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
        }
        None => EditorConfig::default(),
    };
    let script = fs::read_to_string(script_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read script file '{}': {}",
            script_path, e
        ))
    });
    let commands =
        Replay::parse_script(&script).unwrap_or_else(|e| exit_with_error(&e.to_string()));

    // --- 2. Replay ---
    let mut editor = CanvasEditor::builder()
        .with_config(config)
        .build()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let mut replay = Replay::new();
    let replay_start = Instant::now();
    let command_count = commands.len();
    let outcomes = replay
        .run(&mut editor, commands)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let replay_duration = replay_start.elapsed();

    if verbose {
        for (step, outcome) in outcomes.iter().enumerate() {
            let rendered = serde_json::to_string(outcome).unwrap_or_else(|e| e.to_string());
            eprintln!("[{:>3}] {}", step, rendered);
        }
    }

    // --- 3. Export ---
    match out {
        Some(path) => {
            let file = fs::File::create(&path).unwrap_or_else(|e| {
                exit_with_error(&format!("Could not create file '{}': {}", path, e))
            });
            let mut sink = WriterSink::new(file, format);
            editor
                .run(&mut sink)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            eprintln!("Workflow exported to {}", path);
        }
        None => {
            let mut sink = WriterSink::new(io::stdout(), format);
            editor
                .run(&mut sink)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        }
    }

    eprintln!("\n--- Replay Summary ---");
    eprintln!("Commands:       {}", command_count);
    eprintln!("Nodes:          {}", editor.nodes().len());
    eprintln!("Connections:    {}", editor.edges().len());
    eprintln!("Replay:         {:?}", replay_duration);
    eprintln!("Total:          {:?}", total_start.elapsed());
    let _ = io::stderr().flush();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
