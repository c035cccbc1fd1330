use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use super::inventory::{read_inventory, sample_inventory, Inventory};

pub enum IoCommand {
    /// Load from a JSON file, or the built-in sample when no path is configured
    LoadInventory(Option<PathBuf>),
}

pub enum IoResult {
    InventoryLoaded(Inventory),
    Error(String),
}

pub fn spawn_worker(ctx: eframe::egui::Context) -> (Sender<IoCommand>, Receiver<IoResult>) {
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            let result = match cmd {
                IoCommand::LoadInventory(Some(path)) => match read_inventory(&path) {
                    Ok(inventory) => IoResult::InventoryLoaded(inventory),
                    Err(e) => {
                        tracing::error!(path = %path.display(), "inventory load failed: {e}");
                        IoResult::Error(format!("Inventory error: {e}"))
                    }
                },
                IoCommand::LoadInventory(None) => IoResult::InventoryLoaded(sample_inventory()),
            };
            if res_tx.send(result).is_err() {
                break;
            }
            ctx.request_repaint();
        }
        tracing::debug!("io worker stopped");
    });

    (cmd_tx, res_rx)
}
