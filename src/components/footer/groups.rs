use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppState, Focus};
use crate::domain::models::Page;

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    let mut groups = Vec::new();

    match (state.page, state.focus) {
        (_, Focus::Entry) if state.suggestions.is_visible() => {
            groups.push(FooterGroup {
                name: "SUGGEST",
                items: vec![
                    FooterItem::new("↑/↓", "choose"),
                    FooterItem {
                        highlighted: state.suggestions.selected.is_some(),
                        ..FooterItem::new("Enter", "pick")
                    },
                    FooterItem::new("Esc", "close"),
                ],
            });
        }
        (Page::AreaSelect, _) => {
            groups.push(FooterGroup {
                name: "AREA",
                items: vec![
                    FooterItem::new("j/k", "move"),
                    FooterItem {
                        highlighted: state.area_form.selected.is_some(),
                        ..FooterItem::new("Enter", "continue")
                    },
                ],
            });
        }
        (Page::SignIn, _) => {
            groups.push(FooterGroup {
                name: "ENTRY",
                items: vec![
                    FooterItem::new("type", "name"),
                    FooterItem::new("Enter", "sign in"),
                ],
            });
        }
    }

    groups.push(FooterGroup {
        name: "APP",
        items: vec![
            FooterItem::new("Tab", "focus"),
            FooterItem::new("^C", "quit"),
        ],
    });
    groups
}
