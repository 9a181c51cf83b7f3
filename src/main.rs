use macroquad::prelude::*;
use automata_lab::{
    ConwayEngine, LangtonEngine, Session, SimulationConfig,
    domain::all_rules,
    input, presets, rendering,
    rendering::GridView,
    ui::{self, Action, Button, Dropdown, RuleEditor, CONWAY_ACTIONS, LANGTON_ACTIONS},
};

const RULE_DROPDOWN_Y: f32 = 170.0;
const PATTERN_DROPDOWN_Y: f32 = 220.0;
const CONWAY_BUTTONS_TOP: f32 = 270.0;
const RULE_EDITOR_Y: f32 = 600.0;
const LANGTON_BUTTONS_TOP: f32 = 120.0;
const MIN_WINDOW_HEIGHT: f32 = 720.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Screen {
    Menu,
    Conway,
    Langton,
}

fn window_conf() -> Conf {
    let config = SimulationConfig::default();
    let (grid_width, grid_height) = GridView::new(config.cell_size).extent((config.width, config.height));
    Conf {
        window_title: "Cellular automata demos".to_owned(),
        window_width: (grid_width + ui::PANEL_WIDTH) as i32,
        window_height: grid_height.max(MIN_WINDOW_HEIGHT) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn menu_buttons() -> [(Screen, Button); 2] {
    [
        (Screen::Conway, Button::new(40.0, 220.0, 280.0, 44.0, "Conway's Game of Life")),
        (Screen::Langton, Button::new(40.0, 280.0, 280.0, 44.0, "Langton's Ant")),
    ]
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = SimulationConfig::default();
    if let Err(err) = config.validate() {
        log::error!("Invalid configuration: {err}");
        return;
    }
    let (mut conway, mut langton) = match (
        Session::<ConwayEngine>::conway(&config),
        Session::<LangtonEngine>::langton(&config),
    ) {
        (Ok(conway), Ok(langton)) => (conway, langton),
        (Err(err), _) | (_, Err(err)) => {
            log::error!("Cannot build sessions: {err}");
            return;
        }
    };
    log::info!(
        "Grid {}x{}, rule {}, fill {:.0}%",
        config.width,
        config.height,
        conway.engine.rule(),
        config.fill_fraction * 100.0
    );

    let view = GridView::new(config.cell_size);
    let mut fill_fraction = config.fill_fraction;
    let mut screen = Screen::Menu;

    let rules = all_rules();
    let patterns = presets::all_patterns();
    let mut rule_dropdown = Dropdown::new(
        0.0,
        RULE_DROPDOWN_Y,
        ui::PANEL_WIDTH - 20.0,
        "Rule",
        rules.iter().map(|(name, rule)| format!("{name} {rule}")).collect(),
    );
    let mut pattern_dropdown = Dropdown::new(
        0.0,
        PATTERN_DROPDOWN_Y,
        ui::PANEL_WIDTH - 20.0,
        "Pattern",
        patterns.iter().map(|p| p.name.to_owned()).collect(),
    );
    let mut rule_editor = RuleEditor::new(0.0, RULE_EDITOR_Y, ui::PANEL_WIDTH - 20.0, &conway.engine.rule());
    let mut pending_pattern: Option<usize> = None;

    loop {
        let mouse_pos = mouse_position();
        clear_background(Color::from_rgba(20, 20, 20, 255));

        match screen {
            Screen::Menu => {
                let buttons = menu_buttons();
                if let Some(&(target, _)) = buttons.iter().find(|(_, btn)| btn.is_clicked(mouse_pos)) {
                    log::info!("Opening {target:?} demo");
                    screen = target;
                }
                let buttons: Vec<Button> = buttons.into_iter().map(|(_, btn)| btn).collect();
                rendering::draw_menu(&buttons, mouse_pos);
            }

            Screen::Conway => {
                let px = ui::panel_x() + 10.0;
                rule_dropdown.set_position(px, RULE_DROPDOWN_Y);
                pattern_dropdown.set_position(px, PATTERN_DROPDOWN_Y);
                rule_editor.set_position(px, RULE_EDITOR_Y);

                // Decided before the dropdowns consume this frame's click
                let over_lists =
                    rule_dropdown.is_hovered_any(mouse_pos) || pattern_dropdown.is_hovered_any(mouse_pos);
                let over_dropdown = over_lists || rule_editor.is_hovered_any(mouse_pos);

                if !over_lists && is_mouse_button_pressed(MouseButton::Left) {
                    rule_editor.click(mouse_pos);
                }
                if rule_editor.update()
                    && let Err(err) = input::submit_rule(&mut conway, &mut rule_editor)
                {
                    log::debug!("Rule text left in editor: {err}");
                }

                if let Some(idx) = rule_dropdown.update(mouse_pos) {
                    conway.engine.set_rule(rules[idx].1);
                    rule_editor.sync(&rules[idx].1);
                }
                if rule_dropdown.is_open() {
                    pattern_dropdown.close();
                }
                if let Some(idx) = pattern_dropdown.update(mouse_pos) {
                    pending_pattern = Some(idx);
                    conway = conway.pause();
                }
                if pattern_dropdown.is_open() {
                    rule_dropdown.close();
                }

                let buttons: Vec<(Action, Button)> = ui::create_buttons(CONWAY_ACTIONS, CONWAY_BUTTONS_TOP)
                    .into_iter()
                    .map(|(action, btn)| (action, btn.with_active(action == Action::ToggleRunning && conway.is_running)))
                    .collect();
                let clicked = if over_dropdown {
                    None
                } else {
                    input::clicked_action(&buttons, mouse_pos)
                };
                let typed = if rule_editor.is_editing() {
                    None
                } else {
                    input::keyboard_action()
                };
                if let Some(action) = clicked.or(typed) {
                    if action == Action::BackToMenu {
                        screen = Screen::Menu;
                        pending_pattern = None;
                    }
                    conway = input::apply_conway_action(conway, action, &mut fill_fraction);
                }
                conway = conway.adjust_speed(input::speed_delta());

                match pending_pattern {
                    Some(_) if is_mouse_button_pressed(MouseButton::Right) || is_key_pressed(KeyCode::Escape) => {
                        pending_pattern = None;
                    }
                    Some(idx) if !over_dropdown && is_mouse_button_pressed(MouseButton::Left) => {
                        if let Some((x, y)) = input::pointer_cell(&view, mouse_pos) {
                            patterns[idx].place_centered(&mut conway.engine, x, y);
                            pending_pattern = None;
                        }
                    }
                    Some(_) => {}
                    None if !over_dropdown => input::handle_conway_paint(&mut conway, &view, mouse_pos),
                    None => {}
                }

                conway = conway.tick(get_frame_time());

                rendering::draw_automaton(&conway.engine, &view);
                match pending_pattern {
                    Some(idx) => rendering::draw_pattern_preview(&patterns[idx], &view, mouse_pos),
                    None => rendering::draw_cursor(&view, mouse_pos, None),
                }
                let status = rendering::conway_status(
                    &conway.engine.rule(),
                    fill_fraction,
                    conway.ticks,
                    conway.engine.grid().alive_count(),
                    rule_editor.error(),
                );
                rendering::draw_panel(
                    "Game of Life",
                    &status,
                    &buttons,
                    &[&rule_dropdown, &pattern_dropdown],
                    mouse_pos,
                );
                rule_editor.draw();
            }

            Screen::Langton => {
                let buttons: Vec<(Action, Button)> = ui::create_buttons(LANGTON_ACTIONS, LANGTON_BUTTONS_TOP)
                    .into_iter()
                    .map(|(action, btn)| (action, btn.with_active(action == Action::ToggleRunning && langton.is_running)))
                    .collect();
                if let Some(action) = input::clicked_action(&buttons, mouse_pos).or_else(input::keyboard_action) {
                    if action == Action::BackToMenu {
                        screen = Screen::Menu;
                    }
                    langton = input::apply_langton_action(langton, action);
                }
                langton = langton.adjust_speed(input::speed_delta());
                input::handle_ant_placement(&mut langton, &view, mouse_pos);

                langton = langton.tick(get_frame_time());

                rendering::draw_automaton(&langton.engine, &view);
                if !langton.is_running {
                    rendering::draw_cursor(&view, mouse_pos, Some(RED));
                }
                let ant = langton.engine.ant().map(|ant| (ant.x, ant.y));
                let status = rendering::langton_status(langton.ticks, ant, langton.engine.grid().alive_count());
                rendering::draw_panel("Langton's Ant", &status, &buttons, &[], mouse_pos);
            }
        }

        next_frame().await;
    }
}
