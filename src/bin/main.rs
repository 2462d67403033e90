use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use spelling_core::persistence::save_to_disk;
use spelling_core::Engine;
use std::io::{self, stdin, stdout, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let engine = match std::env::args().nth(1) {
        Some(path) => Engine::from_file_or_new(Path::new(&path)),
        None => Engine::new(),
    };
    let mut last = String::new();

    loop {
        print_ui(&engine, &last)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            s if s.starts_with(":save ") => {
                let path = s[":save ".len()..].trim();
                match save_to_disk(&engine.config(), Path::new(path)) {
                    Ok(()) => println!("Config saved to '{}'", path),
                    Err(e) => eprintln!("[ERROR] Could not save config: {}", e),
                }
                println!("(press Enter)");
                stdin().read_line(&mut String::new())?;
            }
            s => last = s.to_string(),
        }
    }

    Ok(())
}

fn print_ui(engine: &Engine, word: &str) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "Digraph Spelling Variants")?;
    writeln!(out, "---------------------------------------------------------------")?;
    writeln!(out, "Type a word and press [Enter]. ':save <file.json|file.bin>' writes")?;
    writeln!(out, "the active config. 'exit' quits.\n")?;

    if !word.is_empty() {
        let normalized = engine.normalize(word);
        let encoded = engine.encode(&normalized);
        let variants = engine.variants(&encoded);

        writeln!(out, "Input:      [{}]", word)?;
        writeln!(out, "Normalized: [{}]", normalized)?;
        writeln!(out, "Encoded:    [{}]", encoded)?;
        writeln!(out, "\nVariants ({}):", variants.len())?;
        for (i, variant) in variants.iter().enumerate() {
            writeln!(out, "  {:>3}: {}", i + 1, variant)?;
        }
        match engine.query(word) {
            Ok(query) => writeln!(out, "\nQuery:\n  {}", query)?,
            Err(e) => writeln!(out, "\nNo query: {}", e)?,
        }
    }

    write!(out, "\n> ")?;
    out.flush()
}
