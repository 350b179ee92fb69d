//! Demo de consola de la acción de saludo.
//!
//! Ejecuta la secuencia de ejemplo contra stdin/stdout. Con un argumento, el
//! nombre va como input inicial y el prompt se salta; sin argumento, el run
//! se suspende y se reanuda con la línea leída de stdin.

use std::io::{self, BufRead, Write};

use convo_core::channel::OutputChannel;
use convo_core::engine::{DialogEngine, RunState};
use convo_core::event::InMemoryEventStore;
use convo_skills::{sample_action_sequence, SampleActionInput, UuidCustomerIds};

struct ConsoleChannel;

impl OutputChannel for ConsoleChannel {
    fn send(&self, text: &str) {
        println!("{}", text);
    }
}

fn main() {
    let definition = sample_action_sequence(UuidCustomerIds);
    let mut engine = DialogEngine::with_sequence(InMemoryEventStore::default(), definition);
    let channel = ConsoleChannel;

    let initial = std::env::args().nth(1).map(|name| SampleActionInput::new(name).to_value());

    let mut handle = match engine.start(&channel, initial) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("start failed: {}", err);
            std::process::exit(1);
        }
    };

    while let RunState::Suspended { prompt, .. } = &handle.state {
        let hint = prompt.hint.as_deref().unwrap_or(prompt.prompt_id.as_str());
        print!("{} ", hint);
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() || line.trim().is_empty() {
            eprintln!("no input; abandoning run");
            return;
        }

        handle = match engine.resume(&channel, handle.run_id, serde_json::json!(line.trim())) {
            Ok(handle) => handle,
            Err(err) => {
                eprintln!("resume failed: {}", err);
                std::process::exit(1);
            }
        };
    }

    match handle.state {
        RunState::Completed { output } => println!("result: {}", output),
        other => eprintln!("run ended without completing: {:?}", other),
    }

    // Traza compacta del run, útil para inspección rápida.
    println!("events: {:?}", engine.event_variants(handle.run_id));
}
