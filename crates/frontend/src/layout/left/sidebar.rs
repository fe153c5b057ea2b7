//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::{
    A001_BRANCH, A002_CATEGORY, A003_DELIVERY_COMPANY, A004_SUPPLIER, A005_RETURN_REQUEST,
    SYS_SETTINGS, SYS_USERS,
};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    admin_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "organization",
            label: "Organization",
            icon: "branch",
            items: vec![(A001_BRANCH, "branch"), (A002_CATEGORY, "category")],
            admin_only: false,
        },
        MenuGroup {
            id: "purchasing",
            label: "Purchasing",
            icon: "suppliers",
            items: vec![(A004_SUPPLIER, "suppliers"), (A005_RETURN_REQUEST, "returns")],
            admin_only: false,
        },
        MenuGroup {
            id: "delivery",
            label: "Delivery",
            icon: "truck",
            items: vec![(A003_DELIVERY_COMPANY, "truck")],
            admin_only: false,
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "settings",
            items: vec![(SYS_USERS, "users"), (SYS_SETTINGS, "settings")],
            admin_only: true,
        },
    ]
}

#[component]
fn MenuItem(key: &'static str, icon_name: &'static str) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let label = tab_label_for_key(key);
    let label_for_open = label.clone();

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.active.get().as_deref() == Some(key)
            on:click=move |_| ctx.open_tab(key, &label_for_open)
        >
            <div class="app-sidebar__item-content">
                {icon(icon_name)}
                <span>{label}</span>
            </div>
        </div>
    }
}

#[component]
fn MenuGroupView(group: MenuGroup, expanded: RwSignal<Vec<&'static str>>) -> impl IntoView {
    let group_id = group.id;
    let is_expanded = move || expanded.with(|ids| ids.contains(&group_id));
    let toggle = move |_| {
        expanded.update(|ids| {
            if let Some(pos) = ids.iter().position(|id| *id == group_id) {
                ids.remove(pos);
            } else {
                ids.push(group_id);
            }
        });
    };

    view! {
        <div class="app-sidebar__group">
            <div class="app-sidebar__item" on:click=toggle>
                <div class="app-sidebar__item-content">
                    {icon(group.icon)}
                    <span>{group.label}</span>
                </div>
                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_expanded>
                    {icon("chevron-right")}
                </div>
            </div>
            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {group
                        .items
                        .iter()
                        .map(|(key, icon_name)| view! { <MenuItem key=*key icon_name=*icon_name /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_auth();
    let expanded = RwSignal::new(
        menu_groups()
            .iter()
            .filter(|group| !group.admin_only)
            .map(|group| group.id)
            .collect::<Vec<_>>(),
    );

    view! {
        <nav class="app-sidebar__content">
            {menu_groups()
                .into_iter()
                .map(|group| {
                    if group.admin_only {
                        let group = StoredValue::new(group);
                        view! {
                            <Show when=move || session.is_admin()>
                                <MenuGroupView group=group.get_value() expanded=expanded />
                            </Show>
                        }
                        .into_any()
                    } else {
                        view! { <MenuGroupView group=group expanded=expanded /> }.into_any()
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_title() {
        for group in menu_groups() {
            for (key, _) in group.items {
                assert_ne!(tab_label_for_key(key), key, "missing title for {}", key);
            }
        }
    }

    #[test]
    fn test_only_administration_is_restricted() {
        let restricted: Vec<&str> = menu_groups()
            .into_iter()
            .filter(|group| group.admin_only)
            .map(|group| group.id)
            .collect();
        assert_eq!(restricted, vec!["administration"]);
    }
}
