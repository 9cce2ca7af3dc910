// src/engine.rs
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::config;
use crate::meter::{Sampler, SerialLink};
use crate::types::{GuiCommand, MeterMessage};

/// Spawns the worker thread that owns the serial port and drives the poll
/// cycle, posting results to the GUI thread over the channel.
pub fn spawn(
    link: SerialLink,
    tx: Sender<MeterMessage>,
    rx_cmd: Receiver<GuiCommand>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut link = link;
        // The meter never acknowledges this; if the write failed the next
        // query fails too, so a warning is enough here.
        if let Err(e) = link.write_line("SYST:REM") {
            log::warn!("could not switch the meter to remote mode: {e}");
        }

        let mut sampler = Sampler::new(link);
        let started = Instant::now();

        loop {
            match rx_cmd.try_recv() {
                Ok(GuiCommand::Shutdown) | Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => {}
            }

            match sampler.poll(started.elapsed().as_secs_f64()) {
                Ok(update) => {
                    tx.send(MeterMessage::Reading {
                        mode: update.mode_label,
                        range: update.range,
                        measurement: update.measurement,
                    })
                    .ok();
                    if let Some(frame) = update.plot {
                        tx.send(MeterMessage::Plot(frame)).ok();
                    }
                }
                Err(e) => {
                    log::warn!("poll cycle failed: {e}");
                    tx.send(MeterMessage::PollError(e.to_string())).ok();
                }
            }

            thread::sleep(config::POLL_INTERVAL);
        }
        // Dropping the sampler releases the link: SYST:LOC, then the port
        // closes. Failures on the way out are ignored.
    })
}
