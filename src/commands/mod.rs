//! # Commands
//!
//! CLI command implementations for folio.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod completions;
pub mod init;
pub mod posts;
pub mod reading;
pub mod serve;
pub mod sitemap;
pub mod tags;
pub mod views;
pub mod works;

pub use self::{
    add::{execute as add, AddArgs},
    completions::execute as completions,
    init::execute as init,
    posts::{execute as posts, show_post, PostsArgs},
    reading::{execute as reading, ReadingArgs},
    serve::{execute as serve, ServeArgs},
    sitemap::{execute as sitemap, SitemapArgs},
    tags::{execute_categories as categories, execute_tags as tags, TagsArgs},
    views::{execute as views, ViewsAction},
    works::execute as works,
};
