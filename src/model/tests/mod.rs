mod api;
mod article;
