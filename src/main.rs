//! Walletdeck - wallet platform console
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

mod action;
mod app;
mod config;
mod constants;
mod messages;
mod models;
mod network;
mod paging;
mod routes;
mod select;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use config::Config;
use constants::APP_NAME;
use messages::render::{AddressDetailView, PhaseView, ScreenView, WalletDetailView, WalletListView};
use messages::ui_events::{key_to_ui_event, TransferField};
use messages::{ApiCommand, ApiResponse, RenderState, UiEvent};
use network::client::create_client;
use network::{ApiClient, NetworkActor};
use ui::{input_line, network_color, pagination_line, truncate};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "walletdeck.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::load();
    tracing::info!(base_url = %config.base_url, "starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<ApiCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let api = ApiClient::new(create_client(), config.base_url);
    let network_actor = NetworkActor::new(api, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let (app_actor, entry) = AppActor::new(ui_rx, net_resp_rx, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(entry));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.key_context()) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, main_chunks[0]);

    match &state.screen {
        ScreenView::WalletList(view) => draw_wallet_list(f, view, main_chunks[1]),
        ScreenView::WalletDetail(view) => draw_wallet_detail(f, view, main_chunks[1]),
        ScreenView::AddressDetail(view) => draw_address_detail(f, view, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }

    if let ScreenView::WalletList(view) = &state.screen {
        if view.select_open {
            draw_network_popup(f, view, area);
        }
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw(" "),
        Span::styled(state.route_path.as_str(), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_wallet_list(f: &mut Frame, view: &WalletListView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Creation panel
        ])
        .split(area);

    match &view.phase {
        PhaseView::Loading => {
            let block = Block::default().borders(Borders::ALL).title(" Wallets ");
            f.render_widget(
                Paragraph::new("Loading wallets...")
                    .block(block)
                    .style(Style::default().fg(Color::DarkGray)),
                chunks[0],
            );
        }
        PhaseView::Failed(message) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Wallets ");
            f.render_widget(
                Paragraph::new(message.as_str())
                    .block(block)
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: false }),
                chunks[0],
            );
        }
        PhaseView::Ready => {
            let items: Vec<ListItem> = view
                .page_wallets
                .iter()
                .enumerate()
                .map(|(i, wallet)| {
                    let selected = i == view.selected_row;
                    let id_style = if selected {
                        Style::default().fg(Color::Yellow).bold()
                    } else {
                        Style::default()
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{:<24}", truncate(&wallet.id, 24)), id_style),
                        Span::styled(
                            wallet.network.to_string(),
                            Style::default().fg(network_color(wallet.network)),
                        ),
                    ]))
                })
                .collect();

            let title = if view.page_wallets.is_empty() {
                " Wallets (none yet, c:create) ".to_string()
            } else {
                " Wallets (Enter:open) ".to_string()
            };

            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_bottom(
                        Line::from(pagination_line(
                            view.current_page,
                            view.total_pages,
                            view.total_wallets,
                            view.per_page,
                        ))
                        .right_aligned(),
                    ),
            );
            f.render_widget(list, chunks[0]);
        }
    }

    // Creation panel
    let network_text = match view.selected_network {
        Some(network) => Span::styled(
            network.to_string(),
            Style::default().fg(network_color(network)),
        ),
        None => Span::styled("<none> (n:select)", Style::default().fg(Color::DarkGray)),
    };
    let status = if view.creating {
        Span::styled(" creating...", Style::default().fg(Color::Yellow))
    } else if let Some(error) = &view.create_error {
        Span::styled(format!(" {}", error), Style::default().fg(Color::Red))
    } else {
        Span::raw("")
    };
    let panel = Paragraph::new(Line::from(vec![
        Span::raw("Network: "),
        network_text,
        status,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" New Wallet (n:network c:create) "),
    );
    f.render_widget(panel, chunks[1]);
}

fn draw_wallet_detail(f: &mut Frame, view: &WalletDetailView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Summary
            Constraint::Length(3), // Address jump input
            Constraint::Min(0),
        ])
        .split(area);

    let network_line = match view.network {
        Some(network) => Line::from(vec![
            Span::raw("Network: "),
            Span::styled(
                network.to_string(),
                Style::default().fg(network_color(network)),
            ),
        ]),
        None => Line::from(Span::styled(
            "Network: unknown",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let summary = Paragraph::new(vec![
        Line::from(format!("Wallet: {}", view.wallet_id)),
        network_line,
    ])
    .block(Block::default().borders(Borders::ALL).title(" Wallet "));
    f.render_widget(summary, chunks[0]);

    let border = if view.editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let input = Paragraph::new(input_line(&view.address_input, view.editing)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Open Address (e:edit, Enter:open) "),
    );
    f.render_widget(input, chunks[1]);
}

fn draw_address_detail(f: &mut Frame, view: &AddressDetailView, area: Rect) {
    match &view.phase {
        PhaseView::Loading => {
            let block = Block::default().borders(Borders::ALL).title(" Address ");
            f.render_widget(
                Paragraph::new("Loading address...")
                    .block(block)
                    .style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        }
        PhaseView::Failed(message) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Address ");
            f.render_widget(
                Paragraph::new(message.as_str())
                    .block(block)
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: false }),
                area,
            );
            return;
        }
        PhaseView::Ready => {}
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Summary
            Constraint::Min(5),    // Balances
            Constraint::Length(7), // Faucet + transfer
        ])
        .split(area);

    draw_address_summary(f, view, chunks[0]);
    draw_balances(f, view, chunks[1]);
    draw_actions(f, view, chunks[2]);
}

fn draw_address_summary(f: &mut Frame, view: &AddressDetailView, area: Rect) {
    let refresh = if view.refreshing {
        Span::styled(" [refreshing...]", Style::default().fg(Color::Yellow))
    } else if let Some(error) = &view.refresh_error {
        Span::styled(
            format!(" [refresh failed: {}]", error),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::raw("")
    };

    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::raw(format!("Address: {}", view.address_id)),
            refresh,
        ]),
        Line::from(format!(
            "Wallet: {}  Network: {}",
            view.wallet_id, view.network
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Address "));
    f.render_widget(summary, area);
}

fn draw_balances(f: &mut Frame, view: &AddressDetailView, area: Rect) {
    let items: Vec<ListItem> = view
        .page_balances
        .iter()
        .map(|(currency, amount)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", currency),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(amount.as_str()),
            ]))
        })
        .collect();

    let title = if view.total_balances == 0 {
        " Balances (empty) "
    } else {
        " Balances "
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(
                Line::from(pagination_line(
                    view.current_page,
                    view.total_pages,
                    view.total_balances,
                    view.per_page,
                ))
                .right_aligned(),
            ),
    );
    f.render_widget(list, area);
}

fn draw_actions(f: &mut Frame, view: &AddressDetailView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(area);

    // Faucet panel
    let faucet_line = if view.faucet_pending {
        Line::from(Span::styled(
            "Requesting...",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = &view.faucet_error {
        Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)))
    } else if let Some(notice) = &view.faucet_notice {
        Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            "Press f to request funds",
            Style::default().fg(Color::DarkGray),
        ))
    };
    let faucet = Paragraph::new(faucet_line)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Faucet (f) "));
    f.render_widget(faucet, chunks[0]);

    // Transfer panel
    let field_line = |label: &str, value: &str, field: TransferField| -> Line<'static> {
        let focused = view.focused_field == field;
        let marker = if focused { ">" } else { " " };
        let label_style = if focused {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_text = if focused && view.editing {
            format!("{}█", value)
        } else if value.is_empty() {
            "<empty>".to_string()
        } else {
            value.to_string()
        };
        Line::from(vec![
            Span::styled(format!("{} {:<12}", marker, label), label_style),
            Span::raw(value_text),
        ])
    };

    let mut lines = vec![
        field_line("Destination", &view.form.destination_address, TransferField::Destination),
        field_line("Amount", &view.form.amount, TransferField::Amount),
        field_line("Asset", &view.form.asset, TransferField::Asset),
    ];

    if view.transfer_pending {
        lines.push(Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = &view.transfer_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(link) = &view.transaction_link {
        lines.push(Line::from(vec![
            Span::styled("Sent: ", Style::default().fg(Color::Green)),
            Span::raw(link.clone()),
        ]));
    } else if !view.form_submittable {
        lines.push(Line::from(Span::styled(
            "Fill all fields; amount must be a decimal",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let border = if view.editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let transfer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Transfer (e:edit Tab:field s:send) "),
    );
    f.render_widget(transfer, chunks[1]);
}

fn draw_network_popup(f: &mut Frame, view: &WalletListView, area: Rect) {
    let popup_area = centered_rect(30, 20, area);

    let items: Vec<ListItem> = view
        .networks
        .iter()
        .enumerate()
        .map(|(i, network)| {
            let style = if i == view.select_highlight {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(network_color(*network))
            };
            let marker = if view.selected_network == Some(*network) {
                "(x)"
            } else {
                "( )"
            };
            ListItem::new(format!("{} {}", marker, network)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Network (Enter:select Esc:cancel) ")
            .style(Style::default().bg(Color::Black)),
    );

    f.render_widget(Clear, popup_area);
    f.render_widget(list, popup_area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hint = match &state.screen {
        ScreenView::WalletList(view) if view.select_open => {
            " ↑/↓:choose | Enter:select | Esc:cancel "
        }
        ScreenView::WalletList(_) => {
            " ↑/↓:row | ←/→:page | i:size | n:network | c:create | Enter:open | ?:help | q:quit "
        }
        ScreenView::WalletDetail(_) => " e:edit | Enter:open address | Esc:back | q:quit ",
        ScreenView::AddressDetail(view) if view.editing => {
            " Esc:stop editing | Tab:next field "
        }
        ScreenView::AddressDetail(_) => {
            " ←/→:page | i:size | f:faucet | e:edit | s:send | Esc:back | q:quit "
        }
    };

    let line = match &state.activity {
        Some(activity) => Line::from(vec![
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("| {}", activity),
                Style::default().fg(Color::Green),
            ),
        ]),
        None => Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 WALLETDECK - Keyboard Shortcuts

 NAVIGATION
   ↑ / ↓              Move between rows
   ← / →              Previous / next page
   Enter              Open selected wallet
   Esc                Back to previous screen
   r                  Reload current screen

 WALLET LIST
   i                  Cycle page size (10/20/50/100)
   n                  Choose network for creation
   c                  Create wallet

 ADDRESS
   i                  Cycle page size (5/10/20/50)
   f                  Request faucet funds
   e                  Edit transfer form
   Tab                Next form field
   s                  Submit transfer

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
