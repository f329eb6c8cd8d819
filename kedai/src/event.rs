//! Application events
//!
//! Everything the update loop reacts to arrives as one `AppEvent`:
//! terminal input, timer ticks, and completions of spawned API calls.

use crossterm::event::Event as TermEvent;
use kopi_client::ClientError;
use shared::client::{LoginResponse, UserInfo};
use shared::models::{Category, MenuItem, Order};
use tokio::sync::mpsc::UnboundedSender;

/// Menu payload: categories plus items, fetched together
pub struct MenuData {
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
}

/// One unit of work for the update loop
pub enum AppEvent {
    /// Raw terminal input
    Term(TermEvent),
    /// One-second countdown tick (order status screen)
    CountdownTick,
    /// Reconcile refetch tick (order status screen)
    PollOrder,
    MenuLoaded(Result<MenuData, ClientError>),
    /// Startup validation of a restored session
    ProfileLoaded(Result<UserInfo, ClientError>),
    SignedIn(Result<LoginResponse, ClientError>),
    Registered(Result<LoginResponse, ClientError>),
    OrderPlaced(Result<Order, ClientError>),
    OrderFetched(Result<Order, ClientError>),
    HistoryLoaded(Result<Vec<Order>, ClientError>),
}

/// Forward terminal input into the event channel from a blocking reader
pub fn spawn_input_reader(tx: UnboundedSender<AppEvent>) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(ev) => {
                    if tx.send(AppEvent::Term(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Input read failed: {}", e);
                    break;
                }
            }
        }
    });
}
