mod config;
mod page_flow;
mod rendering;
