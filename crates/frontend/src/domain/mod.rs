pub mod a001_branch;
pub mod a002_category;
pub mod a003_delivery_company;
pub mod a004_supplier;
pub mod a005_return_request;
