use cm_cli::{BoardCommand, Client, ContactBoard, board::board_command::HELP};

use std::process::ExitCode;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Run the interactive board until `quit`, Ctrl+C or Ctrl+D
pub async fn run(client: Client) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Error: cannot start line editor: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("cm board on {} - type help for commands", client.base_url);

    let mut board = ContactBoard::new(client);
    board.load().await;
    print!("{}", board.render());

    loop {
        match rl.readline("cm> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                let command = match line.parse::<BoardCommand>() {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", e);
                        continue;
                    }
                };

                match command {
                    BoardCommand::Quit => break,
                    BoardCommand::Help => {
                        println!("{}", HELP);
                        continue;
                    }
                    BoardCommand::Set(field, value) => {
                        board.set_field(field, value);
                    }
                    BoardCommand::Submit => board.submit().await,
                    BoardCommand::Edit(row) => match board.row_id(row).map(String::from) {
                        Some(id) => {
                            board.begin_edit(&id);
                        }
                        None => {
                            eprintln!("no row {}", row);
                            continue;
                        }
                    },
                    BoardCommand::Delete(row) => match board.row_id(row).map(String::from) {
                        Some(id) => board.delete(&id).await,
                        None => {
                            eprintln!("no row {}", row);
                            continue;
                        }
                    },
                    BoardCommand::Cancel => board.cancel(),
                    BoardCommand::Refresh => board.load().await,
                }

                print!("{}", board.render());
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
