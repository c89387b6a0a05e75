use leptos::ev;
use leptos::prelude::*;

/// Which card's menu is open. At most one at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    open: Option<String>,
}

impl MenuState {
    /// Close every other menu and flip this one.
    pub fn toggle(&mut self, menu_id: &str) {
        if self.is_open(menu_id) {
            self.open = None;
        } else {
            self.open = Some(menu_id.to_string());
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, menu_id: &str) -> bool {
        self.open.as_deref() == Some(menu_id)
    }

    pub fn any_open(&self) -> bool {
        self.open.is_some()
    }
}

/// Page-wide menu state. A click anywhere that reaches the window closes
/// all menus; triggers and menu bodies stop propagation so they never do.
pub fn use_menu_state() -> RwSignal<MenuState> {
    let menus = RwSignal::new(MenuState::default());

    let handle = window_event_listener(ev::click, move |_| {
        if menus.with_untracked(|m| m.any_open()) {
            menus.update(|m| m.close_all());
        }
    });
    on_cleanup(move || handle.remove());

    menus
}

#[derive(Clone)]
pub struct MenuItem {
    pub label: String,
    pub on_select: Callback<()>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, on_select: Callback<()>) -> Self {
        Self {
            label: label.into(),
            on_select,
        }
    }
}

#[component]
pub fn CardMenu(
    #[prop(into)] menu_id: String,
    menus: RwSignal<MenuState>,
    items: Vec<MenuItem>,
) -> impl IntoView {
    let toggle = {
        let menu_id = menu_id.clone();
        move |e: ev::MouseEvent| {
            e.stop_propagation();
            menus.update(|m| m.toggle(&menu_id));
        }
    };
    let is_open = move || menus.with(|m| m.is_open(&menu_id));

    view! {
        <div class="project-card-actions">
            <button type="button" class="context-menu-trigger" on:click=toggle>"⋯"</button>
            <div
                class="context-menu"
                style:display=move || if is_open() { "block" } else { "none" }
                on:click=move |e: ev::MouseEvent| e.stop_propagation()
            >
                {items.into_iter().map(|item| {
                    let on_select = item.on_select;
                    view! {
                        <button
                            type="button"
                            class="dropdown-item"
                            on:click=move |e: ev::MouseEvent| {
                                e.stop_propagation();
                                menus.update(|m| m.close_all());
                                on_select.run(());
                            }
                        >{item.label}</button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_then_closes_same_menu() {
        let mut state = MenuState::default();
        state.toggle("card-1");
        assert!(state.is_open("card-1"));

        state.toggle("card-1");
        assert!(!state.any_open());
    }

    #[test]
    fn test_opening_one_menu_closes_the_other() {
        let mut state = MenuState::default();
        state.toggle("card-1");
        state.toggle("card-2");

        assert!(!state.is_open("card-1"));
        assert!(state.is_open("card-2"));
    }

    #[test]
    fn test_close_all() {
        let mut state = MenuState::default();
        state.toggle("card-3");
        state.close_all();

        assert_eq!(state, MenuState::default());
    }
}
