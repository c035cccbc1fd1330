use crate::config::Config;
use crate::error::DashboardError;
use crate::io::{spawn_worker, Inventory, IoCommand, IoResult};
use crate::message::Message;
use crate::session::{Role, SessionStatus, SessionStore};
use crate::state::{DashboardSession, SectionRegistry};
use crate::style::{self, Theme};
use eframe::egui;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;

pub enum Screen {
    SignIn,
    /// Admin accounts are sent to the admin console instead
    AdminNotice(String),
    Dashboard,
}

pub struct Console {
    pub config: Config,
    pub registry: SectionRegistry,
    pub theme: Theme,
    pub screen: Screen,
    pub username: String,
    pub session: Option<DashboardSession>,
    pub inventory: Inventory,
    pub inventory_loading: bool,
    pub quota_cluster: Option<String>,
    pub sign_in_buffer: String,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
    session_store: Box<dyn SessionStore>,
    command_tx: Sender<IoCommand>,
    result_rx: Receiver<IoResult>,
}

impl Console {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        registry: SectionRegistry,
        session_store: Box<dyn SessionStore>,
    ) -> Self {
        let theme = Theme::from_config(&config.theme.mode);
        cc.egui_ctx.set_visuals(theme.visuals());
        style::apply_font_size(&cc.egui_ctx, config.font.font_size);

        let (command_tx, result_rx) = spawn_worker(cc.egui_ctx.clone());

        let mut app = Self {
            config,
            registry,
            theme,
            screen: Screen::SignIn,
            username: String::new(),
            session: None,
            inventory: Inventory::default(),
            inventory_loading: false,
            quota_cluster: None,
            sign_in_buffer: String::new(),
            error_message: None,
            info_message: None,
            session_store,
            command_tx,
            result_rx,
        };
        app.mount();
        app
    }

    /// Run the session check and build a fresh dashboard session for operators.
    fn mount(&mut self) {
        match self.session_store.check() {
            SessionStatus::SignedOut => {
                self.screen = Screen::SignIn;
                self.session = None;
            }
            SessionStatus::Admin { username } => {
                tracing::info!(username = %username, "admin session, dashboard not mounted");
                self.screen = Screen::AdminNotice(username);
                self.session = None;
            }
            SessionStatus::Operator { username } => {
                tracing::info!(username = %username, "mounting dashboard");
                self.username = username;
                self.session = Some(DashboardSession::new(
                    self.registry.clone(),
                    self.config.sidebar.start_collapsed,
                ));
                self.screen = Screen::Dashboard;
                self.request_inventory();
            }
        }
    }

    fn request_inventory(&mut self) {
        self.inventory_loading = true;
        let command = IoCommand::LoadInventory(self.config.inventory.path.clone());
        if self.command_tx.send(command).is_err() {
            self.inventory_loading = false;
            self.set_error("Inventory worker is not running".to_string());
        }
    }

    fn poll_worker(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                IoResult::InventoryLoaded(inventory) => {
                    self.inventory_loading = false;
                    self.set_info(format!(
                        "Loaded {} clusters, {} applications",
                        inventory.clusters.len(),
                        inventory.applications.len()
                    ));
                    self.inventory = inventory;
                }
                IoResult::Error(message) => {
                    self.inventory_loading = false;
                    self.set_error(message);
                }
            }
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    fn clear_expired_messages(&mut self) {
        let expired = |slot: &Option<(String, Instant)>| {
            slot.as_ref()
                .is_some_and(|(_, at)| at.elapsed().as_secs() >= style::MESSAGE_TIMEOUT_SECS)
        };
        if expired(&self.error_message) {
            self.error_message = None;
        }
        if expired(&self.info_message) {
            self.info_message = None;
        }
    }

    pub fn handle(&mut self, message: Message) {
        if message.is_core() {
            let Some(session) = self.session.as_mut() else {
                return;
            };
            if let Err(e) = session.dispatch(message) {
                self.report(e);
            }
            return;
        }

        match message {
            Message::ShowQuota(name) => self.quota_cluster = Some(name),
            Message::CloseQuota => self.quota_cluster = None,
            Message::ReloadInventory => self.request_inventory(),
            Message::SignIn(username) => {
                let username = username.trim().to_string();
                if username.is_empty() {
                    self.set_error("Enter a username".to_string());
                    return;
                }
                match self.session_store.sign_in(&username, Role::Operator) {
                    Ok(()) => {
                        self.sign_in_buffer.clear();
                        self.mount();
                    }
                    Err(e) => self.report(e),
                }
            }
            Message::Logout => {
                if let Err(e) = self.session_store.logout() {
                    self.report(e);
                }
                self.session = None;
                self.quota_cluster = None;
                self.username.clear();
                self.screen = Screen::SignIn;
            }
            _ => {}
        }
    }

    fn report(&mut self, error: DashboardError) {
        if error.is_rejected_input() {
            tracing::warn!("rejected action: {error}");
        } else {
            tracing::error!("{error}");
        }
        self.set_error(error.to_string());
    }
}

impl eframe::App for Console {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        self.clear_expired_messages();

        let mut messages = Vec::new();
        if matches!(self.screen, Screen::SignIn) {
            self.render_sign_in(ctx, &mut messages);
        } else if let Screen::AdminNotice(username) = &self.screen {
            self.render_admin_notice(ctx, username, &mut messages);
        } else {
            self.handle_input(ctx, &mut messages);
            self.render_dashboard(ctx, &mut messages);
        }

        for message in messages {
            self.handle(message);
        }

        if self.error_message.is_some() || self.info_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
