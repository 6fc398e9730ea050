mod sync_and_fetch;

use breachwatch::server::service::breach::BreachService;
use breachwatch_test_utils::prelude::*;
use entity::prelude::BreachRecord;
use sea_orm::{EntityTrait, PaginatorTrait};
