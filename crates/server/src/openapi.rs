use common::types::Health;
use utoipa::OpenApi;

use crate::routes::{recipes, sources};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::recipes::list,
        crate::routes::recipes::get,
        crate::routes::recipes::create,
        crate::routes::recipes::update,
        crate::routes::recipes::delete,
        crate::routes::sources::list,
        crate::routes::sources::get,
        crate::routes::sources::create,
        crate::routes::sources::update,
        crate::routes::sources::delete,
    ),
    components(
        schemas(
            Health,
            recipes::RecipeModel,
            recipes::RecipeInput,
            sources::SourceModel,
            sources::SourceInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "recipes"),
        (name = "sources")
    )
)]
pub struct ApiDoc;
