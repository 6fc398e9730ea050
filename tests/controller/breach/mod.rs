mod get_breach;
mod list_breaches;
mod notify_demo;
mod search_breaches;

use super::*;
