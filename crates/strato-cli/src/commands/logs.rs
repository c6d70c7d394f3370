use strato_journal::EventJournal;

const TAIL_LIMIT: usize = 20;

pub fn run(journal: &EventJournal) -> Result<(), String> {
    let entries = journal.tail(TAIL_LIMIT).map_err(|e| e.to_string())?;
    if entries.is_empty() {
        println!("no log entries yet");
    } else {
        for entry in entries {
            println!("{entry}");
        }
    }
    Ok(())
}
