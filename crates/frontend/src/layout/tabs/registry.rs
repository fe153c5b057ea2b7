//! Tab content registry: the single mapping from `tab.key` to a view.

use crate::domain::a001_branch::ui::details::BranchDetails;
use crate::domain::a001_branch::ui::list::BranchList;
use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_delivery_company::ui::details::DeliveryCompanyDetails;
use crate::domain::a003_delivery_company::ui::list::DeliveryCompanyList;
use crate::domain::a004_supplier::ui::details::SupplierDetails;
use crate::domain::a004_supplier::ui::list::SupplierList;
use crate::domain::a005_return_request::ui::details::ReturnDetails;
use crate::domain::a005_return_request::ui::list::ReturnList;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::EmptyState;
use crate::system::settings::ui::CompanySettingsPage;
use crate::system::users::ui::details::UserDetails;
use crate::system::users::ui::list::UsersList;
use leptos::prelude::*;

use super::tab_labels::{
    parse_detail_key, A001_BRANCH, A002_CATEGORY, A003_DELIVERY_COMPANY, A004_SUPPLIER,
    A005_RETURN_REQUEST, SYS_SETTINGS, SYS_USERS,
};

/// Renders the content of the tab with `key`.
///
/// Detail views get an `on_close` that closes their own tab. Unknown keys
/// render a placeholder.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    match key {
        A001_BRANCH => view! { <BranchList /> }.into_any(),
        A002_CATEGORY => view! { <CategoryList /> }.into_any(),
        A003_DELIVERY_COMPANY => view! { <DeliveryCompanyList /> }.into_any(),
        A004_SUPPLIER => view! { <SupplierList /> }.into_any(),
        A005_RETURN_REQUEST => view! { <ReturnList /> }.into_any(),
        SYS_USERS => view! { <UsersList /> }.into_any(),
        SYS_SETTINGS => view! { <CompanySettingsPage on_close=on_close /> }.into_any(),
        k => match parse_detail_key(k) {
            Some((A001_BRANCH, id)) => view! { <BranchDetails id=id on_close=on_close /> }.into_any(),
            Some((A002_CATEGORY, id)) => {
                view! { <CategoryDetails id=id on_close=on_close /> }.into_any()
            }
            Some((A003_DELIVERY_COMPANY, id)) => {
                view! { <DeliveryCompanyDetails id=id on_close=on_close /> }.into_any()
            }
            Some((A004_SUPPLIER, id)) => {
                view! { <SupplierDetails id=id on_close=on_close /> }.into_any()
            }
            Some((A005_RETURN_REQUEST, id)) => {
                view! { <ReturnDetails id=id on_close=on_close /> }.into_any()
            }
            Some((SYS_USERS, id)) => view! { <UserDetails id=id on_close=on_close /> }.into_any(),
            _ => {
                log::warn!("unknown tab key '{}'", k);
                view! { <EmptyState message="This page is not available" /> }.into_any()
            }
        },
    }
}
