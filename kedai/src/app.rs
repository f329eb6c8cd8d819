//! Application state and update loop
//!
//! The app owns the explicit store objects (cart, session) and passes
//! them by reference to the screens. All mutations run on the update
//! loop, so writes are serialized by construction; API calls are
//! spawned tasks that report back over the event channel.

use std::path::Path;
use std::time::Duration;

use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use kopi_client::{ClientConfig, ClientError, HttpClient};
use shared::client::{LoginResponse, RegisterRequest, UserInfo};
use shared::models::{Category, MenuItem, Order, OrderCreate, OrderCreateItem, ServiceType};
use shared::util::now_millis;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::event::{AppEvent, MenuData};
use crate::order_watch::{OrderWatch, POLL_INTERVAL_SECS};
use crate::route::Route;
use crate::storage::{CART_RECORD, JsonRecord, SESSION_RECORD};
use crate::store::{CartStore, SessionStore};

/// Menu browser state
#[derive(Default)]
pub struct MenuState {
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
    /// 0 = all categories, i = categories[i - 1]
    pub selected_category: usize,
    pub selected_item: usize,
    pub loading: bool,
}

impl MenuState {
    /// Items for the selected category, unavailable ones filtered out
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        let category = self
            .selected_category
            .checked_sub(1)
            .and_then(|i| self.categories.get(i))
            .map(|c| c.id);
        self.items
            .iter()
            .filter(|item| item.is_available)
            .filter(|item| category.is_none_or(|id| item.category == id))
            .collect()
    }

    pub fn selected(&self) -> Option<&MenuItem> {
        self.visible_items().get(self.selected_item).copied()
    }
}

/// Sign-in / sign-up form fields
#[derive(Default)]
pub struct AuthForm {
    pub username: Input,
    pub password: Input,
    pub name: Input,
    pub email: Input,
    pub focus: usize,
}

impl AuthForm {
    fn field_count(route: &Route) -> usize {
        match route {
            Route::SignUp => 4,
            _ => 2,
        }
    }

    fn focused_mut(&mut self) -> &mut Input {
        match self.focus {
            0 => &mut self.username,
            1 => &mut self.password,
            2 => &mut self.name,
            _ => &mut self.email,
        }
    }
}

/// Checkout form: service selector plus table/note fields
pub struct CheckoutForm {
    pub service: ServiceType,
    pub table: Input,
    pub note: Input,
    /// 0 = service selector, 1 = table, 2 = note
    pub focus: usize,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            service: ServiceType::Takeaway,
            table: Input::default(),
            note: Input::default(),
            focus: 0,
        }
    }
}

/// Top-level application state
pub struct App {
    pub client: HttpClient,
    pub cart: CartStore,
    pub session: SessionStore,
    pub route: Route,
    pub menu: MenuState,
    pub auth_form: AuthForm,
    pub checkout: CheckoutForm,
    pub watch: Option<OrderWatch>,
    pub history: Vec<Order>,
    pub history_selected: usize,
    pub history_loading: bool,
    pub cart_selected: usize,
    /// Inline dismissible error for the current screen
    pub error: Option<String>,
    pub notice: Option<String>,
    pub show_log: bool,
    pub busy: bool,
    pub should_quit: bool,
    after_auth: Option<Route>,
    tx: UnboundedSender<AppEvent>,
    countdown_task: Option<JoinHandle<()>>,
    poll_task: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(config: ClientConfig, data_dir: &Path, tx: UnboundedSender<AppEvent>) -> Self {
        let session = SessionStore::load(JsonRecord::new(data_dir, SESSION_RECORD));
        let cart = CartStore::load(JsonRecord::new(data_dir, CART_RECORD));

        let mut client = config.build_http_client();
        if let Some(token) = session.token() {
            client.set_token(Some(token.to_string()));
        }

        Self {
            client,
            cart,
            session,
            route: Route::Home,
            menu: MenuState::default(),
            auth_form: AuthForm::default(),
            checkout: CheckoutForm::default(),
            watch: None,
            history: Vec::new(),
            history_selected: 0,
            history_loading: false,
            cart_selected: 0,
            error: None,
            notice: None,
            show_log: false,
            busy: false,
            should_quit: false,
            after_auth: None,
            tx,
            countdown_task: None,
            poll_task: None,
        }
    }

    // ========== Update loop ==========

    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Term(TermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                self.on_key(key)
            }
            AppEvent::Term(_) => {}
            AppEvent::CountdownTick => self.on_countdown_tick(),
            AppEvent::PollOrder => self.refetch_order(),
            AppEvent::MenuLoaded(res) => self.on_menu_loaded(res),
            AppEvent::ProfileLoaded(res) => self.on_profile_loaded(res),
            AppEvent::SignedIn(res) => {
                self.on_auth_response(res, "Invalid username or password")
            }
            AppEvent::Registered(res) => self.on_auth_response(res, "Registration rejected"),
            AppEvent::OrderPlaced(res) => self.on_order_placed(res),
            AppEvent::OrderFetched(res) => self.on_order_fetched(res),
            AppEvent::HistoryLoaded(res) => self.on_history_loaded(res),
        }
    }

    /// Central failure funnel: a 401 anywhere clears the session and
    /// redirects to sign-in; everything else degrades to inline text
    fn fail(&mut self, err: ClientError) {
        if err.is_unauthorized() {
            tracing::info!("Received 401, clearing local credentials");
            self.session.sign_out();
            self.client.set_token(None);
            self.leave_order_screen();
            self.after_auth = Some(self.route.clone());
            self.route = Route::SignIn;
            self.error = Some("Session expired, please sign in again".to_string());
        } else {
            tracing::warn!("Request failed: {}", err);
            self.error = Some(err.to_string());
        }
    }

    // ========== Navigation ==========

    pub fn navigate(&mut self, route: Route) {
        if route.requires_auth() && !self.session.is_signed_in() {
            tracing::debug!(?route, "Unauthenticated navigation redirected to sign-in");
            self.after_auth = Some(route);
            self.route = Route::SignIn;
            self.notice = Some("Please sign in first".to_string());
            return;
        }

        self.leave_order_screen();
        self.notice = None;

        match &route {
            Route::Menu if self.menu.items.is_empty() => self.load_menu(),
            Route::Dashboard => self.load_history(),
            Route::OrderStatus { id } => self.open_order(id.clone()),
            _ => {}
        }
        self.route = route;
    }

    /// Cancel the repeating tasks tied to the order status screen
    fn leave_order_screen(&mut self) {
        if matches!(self.route, Route::OrderStatus { .. }) {
            self.stop_countdown();
            self.stop_poll();
            self.watch = None;
        }
    }

    fn back(&mut self) {
        let target = match self.route {
            Route::Checkout => Route::Cart,
            Route::OrderStatus { .. } if self.session.is_signed_in() => Route::Dashboard,
            _ => Route::Home,
        };
        self.navigate(target);
    }

    // ========== Menu ==========

    fn load_menu(&mut self) {
        self.menu.loading = true;
        self.error = None;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let res = async {
                let categories = client.categories().await?;
                let items = client.menu_items(None).await?;
                Ok(MenuData { categories, items })
            }
            .await;
            let _ = tx.send(AppEvent::MenuLoaded(res));
        });
    }

    fn on_menu_loaded(&mut self, res: Result<MenuData, ClientError>) {
        self.menu.loading = false;
        match res {
            Ok(data) => {
                self.menu.categories = data.categories;
                self.menu.items = data.items;
                self.menu.selected_category = 0;
                self.menu.selected_item = 0;
            }
            Err(e) => self.fail(e),
        }
    }

    // ========== Auth ==========

    /// Check a restored session against the server and refresh the
    /// cached profile; a 401 clears the stale credential
    pub fn validate_session(&mut self) {
        if !self.session.is_signed_in() {
            return;
        }
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let res = client.me().await;
            let _ = tx.send(AppEvent::ProfileLoaded(res));
        });
    }

    fn on_profile_loaded(&mut self, res: Result<UserInfo, ClientError>) {
        match res {
            Ok(user) => {
                if let Some(token) = self.session.token().map(str::to_string) {
                    self.session.sign_in(token, user);
                }
            }
            Err(e) if e.is_unauthorized() => self.fail(e),
            // best-effort check; the session stays usable offline
            Err(e) => tracing::warn!("Session validation failed: {}", e),
        }
    }

    fn submit_sign_in(&mut self) {
        let username = self.auth_form.username.value().trim().to_string();
        let password = self.auth_form.password.value().to_string();
        if username.is_empty() || password.is_empty() {
            self.error = Some("Username and password are required".to_string());
            return;
        }

        self.error = None;
        self.busy = true;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let res = client.login(&username, &password).await;
            let _ = tx.send(AppEvent::SignedIn(res));
        });
    }

    fn submit_sign_up(&mut self) {
        let username = self.auth_form.username.value().trim().to_string();
        let password = self.auth_form.password.value().to_string();
        let name = self.auth_form.name.value().trim().to_string();
        if username.is_empty() || password.is_empty() || name.is_empty() {
            self.error = Some("Username, password and name are required".to_string());
            return;
        }
        let email = self.auth_form.email.value().trim().to_string();

        self.error = None;
        self.busy = true;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let request = RegisterRequest {
                username,
                password,
                name,
                email: (!email.is_empty()).then_some(email),
            };
            let res = client.register(&request).await;
            let _ = tx.send(AppEvent::Registered(res));
        });
    }

    fn on_auth_response(&mut self, res: Result<LoginResponse, ClientError>, invalid_msg: &str) {
        self.busy = false;
        match res {
            Ok(login) => {
                self.client.set_token(Some(login.token.clone()));
                let name = login.user.name.clone();
                self.session.sign_in(login.token, login.user);
                self.auth_form.password = Input::default();
                let next = self.after_auth.take().unwrap_or(Route::Menu);
                self.navigate(next);
                self.notice = Some(format!("Signed in as {}", name));
            }
            // a 401 here means rejected credentials, not an expired session
            Err(ClientError::Unauthorized) => {
                self.error = Some(invalid_msg.to_string());
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn sign_out(&mut self) {
        // best-effort server notification; local sign-out proceeds regardless
        let mut client = self.client.clone();
        tokio::spawn(async move {
            if let Err(e) = client.logout().await {
                tracing::warn!("Logout notification failed: {}", e);
            }
        });

        self.session.sign_out();
        self.client.set_token(None);
        self.navigate(Route::Home);
        self.notice = Some("Signed out".to_string());
    }

    // ========== Checkout ==========

    fn submit_order(&mut self) {
        self.error = None;
        if self.busy {
            return;
        }
        if self.cart.is_empty() {
            self.error = Some("Cart is empty".to_string());
            return;
        }
        if !self.session.is_signed_in() {
            self.after_auth = Some(Route::Checkout);
            self.route = Route::SignIn;
            self.notice = Some("Please sign in to place your order".to_string());
            return;
        }

        let table = self.checkout.table.value().trim().to_string();
        if self.checkout.service == ServiceType::DineIn && table.is_empty() {
            self.error = Some("Table number is required for dine-in".to_string());
            return;
        }
        let note = self.checkout.note.value().trim().to_string();

        let payload = OrderCreate {
            items: self.cart.lines().iter().map(OrderCreateItem::from).collect(),
            service: self.checkout.service,
            table: (!table.is_empty()).then_some(table),
            note: (!note.is_empty()).then_some(note),
        };

        self.busy = true;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let res = client.create_order(&payload).await;
            let _ = tx.send(AppEvent::OrderPlaced(res));
        });
    }

    fn on_order_placed(&mut self, res: Result<Order, ClientError>) {
        self.busy = false;
        match res {
            Ok(order) => {
                tracing::info!(order_id = %order.id, "Order placed");
                self.cart.clear();
                self.checkout = CheckoutForm::default();
                self.navigate(Route::OrderStatus { id: order.id });
                self.notice = Some("Order placed".to_string());
            }
            Err(e) => self.fail(e),
        }
    }

    // ========== Order status ==========

    fn open_order(&mut self, id: String) {
        self.watch = Some(OrderWatch::new(id));
        self.fetch_order();
        self.start_poll();
    }

    fn fetch_order(&mut self) {
        let Some(id) = self.watch.as_ref().map(|w| w.order_id().to_string()) else {
            return;
        };
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let res = client.order(&id).await;
            let _ = tx.send(AppEvent::OrderFetched(res));
        });
    }

    /// Reconcile tick: replace the local copy with server truth
    fn refetch_order(&mut self) {
        if self.watch.as_ref().is_some_and(|w| !w.is_loading()) {
            self.fetch_order();
        }
    }

    fn on_order_fetched(&mut self, res: Result<Order, ClientError>) {
        match res {
            Ok(order) => {
                let (countdown, poll) = {
                    let Some(watch) = self.watch.as_mut() else {
                        return;
                    };
                    if order.id != watch.order_id() {
                        return;
                    }
                    watch.on_order(order, now_millis());
                    (watch.countdown_active(), watch.poll_active())
                };
                if countdown {
                    self.start_countdown();
                } else {
                    self.stop_countdown();
                }
                if !poll {
                    self.stop_poll();
                }
            }
            Err(e) if e.is_unauthorized() => self.fail(e),
            Err(e) => {
                // inline error with manual retry; no automatic retry
                if let Some(watch) = self.watch.as_mut() {
                    watch.on_error(e.to_string());
                }
                self.stop_countdown();
                self.stop_poll();
            }
        }
    }

    fn retry_order_fetch(&mut self) {
        if let Some(watch) = self.watch.as_mut() {
            watch.retrying();
            self.fetch_order();
            self.start_poll();
        }
    }

    fn on_countdown_tick(&mut self) {
        let still_active = match self.watch.as_mut() {
            Some(watch) => {
                let active = watch.on_tick(now_millis());
                if !active && watch.locally_ready() {
                    tracing::debug!(order_id = %watch.order_id(), "Estimate reached, awaiting confirmation");
                }
                active
            }
            None => false,
        };
        if !still_active {
            self.stop_countdown();
        }
    }

    // ========== History ==========

    fn load_history(&mut self) {
        self.history_loading = true;
        self.error = None;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let res = client.order_history().await;
            let _ = tx.send(AppEvent::HistoryLoaded(res));
        });
    }

    fn on_history_loaded(&mut self, res: Result<Vec<Order>, ClientError>) {
        self.history_loading = false;
        match res {
            Ok(mut orders) => {
                orders.sort_by_key(|o| std::cmp::Reverse(o.created_at));
                self.history = orders;
                if self.history_selected >= self.history.len() {
                    self.history_selected = self.history.len().saturating_sub(1);
                }
            }
            Err(e) => self.fail(e),
        }
    }

    // ========== Repeating tasks ==========

    fn start_countdown(&mut self) {
        if self.countdown_task.is_some() {
            return;
        }
        let tx = self.tx.clone();
        self.countdown_task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(1));
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(AppEvent::CountdownTick).is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_countdown(&mut self) {
        if let Some(task) = self.countdown_task.take() {
            task.abort();
        }
    }

    fn start_poll(&mut self) {
        if self.poll_task.is_some() {
            return;
        }
        let tx = self.tx.clone();
        self.poll_task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(POLL_INTERVAL_SECS));
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(AppEvent::PollOrder).is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_poll(&mut self) {
        if let Some(task) = self.poll_task.take() {
            task.abort();
        }
    }

    // ========== Input ==========

    fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.show_log = !self.show_log;
            return;
        }
        if self.error.is_some() && key.code == KeyCode::Esc {
            self.error = None;
            return;
        }

        match self.route.clone() {
            Route::Home => self.on_key_home(key),
            Route::Menu => self.on_key_menu(key),
            Route::Cart => self.on_key_cart(key),
            Route::Checkout => self.on_key_checkout(key),
            Route::SignIn | Route::SignUp => self.on_key_auth(key),
            Route::Dashboard => self.on_key_dashboard(key),
            Route::OrderStatus { .. } => self.on_key_status(key),
        }
    }

    /// Shared shortcuts for screens without text input
    fn on_key_nav(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.navigate(Route::Home),
            KeyCode::Char('2') => self.navigate(Route::Menu),
            KeyCode::Char('3') => self.navigate(Route::Cart),
            KeyCode::Char('4') => self.navigate(Route::Dashboard),
            _ => return false,
        }
        true
    }

    fn on_key_home(&mut self, key: KeyEvent) {
        if self.on_key_nav(&key) {
            return;
        }
        match key.code {
            KeyCode::Char('m') | KeyCode::Enter => self.navigate(Route::Menu),
            KeyCode::Char('s') => self.navigate(Route::SignIn),
            _ => {}
        }
    }

    fn on_key_menu(&mut self, key: KeyEvent) {
        if self.on_key_nav(&key) {
            return;
        }
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Left => {
                self.menu.selected_category = self.menu.selected_category.saturating_sub(1);
                self.menu.selected_item = 0;
            }
            KeyCode::Right => {
                if self.menu.selected_category < self.menu.categories.len() {
                    self.menu.selected_category += 1;
                    self.menu.selected_item = 0;
                }
            }
            KeyCode::Up => self.menu.selected_item = self.menu.selected_item.saturating_sub(1),
            KeyCode::Down => {
                let max = self.menu.visible_items().len().saturating_sub(1);
                if self.menu.selected_item < max {
                    self.menu.selected_item += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('a') => {
                if let Some(item) = self.menu.selected().cloned() {
                    self.cart.add_item(&item);
                    self.notice = Some(format!("Added {}", item.name));
                }
            }
            KeyCode::Char('r') => self.load_menu(),
            KeyCode::Char('c') => self.navigate(Route::Cart),
            _ => {}
        }
    }

    fn on_key_cart(&mut self, key: KeyEvent) {
        if self.on_key_nav(&key) {
            return;
        }
        let selected_id = self.cart.lines().get(self.cart_selected).map(|l| l.id);
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Up => self.cart_selected = self.cart_selected.saturating_sub(1),
            KeyCode::Down => {
                if self.cart_selected + 1 < self.cart.lines().len() {
                    self.cart_selected += 1;
                }
            }
            KeyCode::Char('+') | KeyCode::Right => {
                if let Some(id) = selected_id {
                    self.cart.increment(id);
                }
            }
            KeyCode::Char('-') | KeyCode::Left => {
                if let Some(id) = selected_id {
                    self.cart.decrement(id);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = selected_id {
                    self.cart.remove_item(id);
                }
            }
            KeyCode::Char('x') => self.cart.clear(),
            KeyCode::Enter => {
                if self.cart.is_empty() {
                    self.error = Some("Cart is empty".to_string());
                } else {
                    self.navigate(Route::Checkout);
                }
            }
            _ => {}
        }
        let max = self.cart.lines().len().saturating_sub(1);
        self.cart_selected = self.cart_selected.min(max);
    }

    fn on_key_checkout(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Tab | KeyCode::Down => {
                self.checkout.focus = (self.checkout.focus + 1) % 3;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.checkout.focus = (self.checkout.focus + 2) % 3;
            }
            KeyCode::Enter => self.submit_order(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if self.checkout.focus == 0 => {
                self.checkout.service = match self.checkout.service {
                    ServiceType::Takeaway => ServiceType::DineIn,
                    ServiceType::DineIn => ServiceType::Takeaway,
                };
            }
            _ => {
                let field = match self.checkout.focus {
                    1 => Some(&mut self.checkout.table),
                    2 => Some(&mut self.checkout.note),
                    _ => None,
                };
                if let Some(input) = field {
                    input.handle_event(&TermEvent::Key(key));
                }
            }
        }
    }

    fn on_key_auth(&mut self, key: KeyEvent) {
        let sign_up = self.route == Route::SignUp;
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Tab | KeyCode::Down => {
                self.auth_form.focus =
                    (self.auth_form.focus + 1) % AuthForm::field_count(&self.route);
            }
            KeyCode::BackTab | KeyCode::Up => {
                let count = AuthForm::field_count(&self.route);
                self.auth_form.focus = (self.auth_form.focus + count - 1) % count;
            }
            KeyCode::Enter => {
                if sign_up {
                    self.submit_sign_up();
                } else {
                    self.submit_sign_in();
                }
            }
            KeyCode::F(2) => {
                self.auth_form.focus = 0;
                self.error = None;
                self.route = if sign_up { Route::SignIn } else { Route::SignUp };
            }
            _ => {
                self.auth_form.focused_mut().handle_event(&TermEvent::Key(key));
            }
        }
    }

    fn on_key_dashboard(&mut self, key: KeyEvent) {
        if self.on_key_nav(&key) {
            return;
        }
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Up => self.history_selected = self.history_selected.saturating_sub(1),
            KeyCode::Down => {
                if self.history_selected + 1 < self.history.len() {
                    self.history_selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(order) = self.history.get(self.history_selected) {
                    self.navigate(Route::OrderStatus { id: order.id.clone() });
                }
            }
            KeyCode::Char('r') => self.load_history(),
            KeyCode::Char('o') => self.sign_out(),
            _ => {}
        }
    }

    fn on_key_status(&mut self, key: KeyEvent) {
        if self.on_key_nav(&key) {
            return;
        }
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Char('r') => self.retry_order_fetch(),
            _ => {}
        }
    }
}

/// Drive the terminal: draw, then apply the next batch of events
pub async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    rx: &mut UnboundedReceiver<AppEvent>,
) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;
        let Some(event) = rx.recv().await else { break };
        app.update(event);
        // coalesce whatever else is already queued before redrawing
        while let Ok(event) = rx.try_recv() {
            app.update(event);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::client::UserInfo;
    use tempfile::TempDir;
    use tokio::sync::mpsc;

    fn test_app(dir: &TempDir) -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(ClientConfig::default(), dir.path(), tx)
    }

    fn signed_in_app(dir: &TempDir) -> App {
        let mut app = test_app(dir);
        app.session.sign_in(
            "tok-1".to_string(),
            UserInfo {
                id: 1,
                username: "dewi".to_string(),
                name: "Dewi".to_string(),
                email: None,
            },
        );
        app
    }

    #[tokio::test]
    async fn test_unauthenticated_dashboard_redirects_to_sign_in() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.navigate(Route::Dashboard);
        assert_eq!(app.route, Route::SignIn);
        assert_eq!(app.after_auth, Some(Route::Dashboard));
    }

    #[tokio::test]
    async fn test_signed_in_dashboard_navigation() {
        let dir = TempDir::new().unwrap();
        let mut app = signed_in_app(&dir);

        app.navigate(Route::Dashboard);
        assert_eq!(app.route, Route::Dashboard);
        assert!(app.history_loading);
    }

    #[tokio::test]
    async fn test_checkout_requires_non_empty_cart() {
        let dir = TempDir::new().unwrap();
        let mut app = signed_in_app(&dir);

        app.route = Route::Checkout;
        app.submit_order();
        assert_eq!(app.error.as_deref(), Some("Cart is empty"));
    }

    #[tokio::test]
    async fn test_dine_in_requires_table_number() {
        let dir = TempDir::new().unwrap();
        let mut app = signed_in_app(&dir);
        app.cart.add_item(&shared::models::MenuItem {
            id: 1,
            name: "Kopi Susu".to_string(),
            description: None,
            image_url: None,
            price: 20000,
            category: 1,
            is_available: true,
        });

        app.route = Route::Checkout;
        app.checkout.service = ServiceType::DineIn;
        app.submit_order();
        assert_eq!(
            app.error.as_deref(),
            Some("Table number is required for dine-in")
        );
        assert!(!app.busy);
    }

    #[tokio::test]
    async fn test_unauthorized_failure_clears_session() {
        let dir = TempDir::new().unwrap();
        let mut app = signed_in_app(&dir);
        app.route = Route::Dashboard;

        app.update(AppEvent::HistoryLoaded(Err(ClientError::Unauthorized)));
        assert!(!app.session.is_signed_in());
        assert!(app.client.token().is_none());
        assert_eq!(app.route, Route::SignIn);
    }

    #[tokio::test]
    async fn test_sign_in_success_returns_to_requested_route() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.navigate(Route::Dashboard);
        assert_eq!(app.route, Route::SignIn);

        let login = LoginResponse {
            token: "tok-9".to_string(),
            user: UserInfo {
                id: 2,
                username: "adi".to_string(),
                name: "Adi".to_string(),
                email: None,
            },
        };
        app.update(AppEvent::SignedIn(Ok(login)));
        assert_eq!(app.route, Route::Dashboard);
        assert_eq!(app.client.token(), Some("tok-9"));
        assert!(app.session.is_signed_in());
    }

    #[tokio::test]
    async fn test_profile_refresh_updates_cached_user() {
        let dir = TempDir::new().unwrap();
        let mut app = signed_in_app(&dir);

        app.update(AppEvent::ProfileLoaded(Ok(UserInfo {
            id: 1,
            username: "dewi".to_string(),
            name: "Dewi Lestari".to_string(),
            email: None,
        })));
        assert_eq!(app.session.user().unwrap().name, "Dewi Lestari");
        assert_eq!(app.session.token(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_rejected_login_stays_on_sign_in() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.route = Route::SignIn;

        app.update(AppEvent::SignedIn(Err(ClientError::Unauthorized)));
        assert_eq!(app.route, Route::SignIn);
        assert_eq!(app.error.as_deref(), Some("Invalid username or password"));
    }
}
