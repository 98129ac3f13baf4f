//! Integration tests for the lookup repositories.

use epictrack_db::models::reference::{
    CreateProjectType, CreateProponent, CreateRegion, CreateSubType, RegionKind,
};
use epictrack_db::repositories::{ProjectTypeRepo, ProponentRepo, RegionRepo, SubTypeRepo};
use sqlx::PgPool;

fn region(name: &str, kind: RegionKind) -> CreateRegion {
    CreateRegion {
        name: name.to_string(),
        entity_type: kind,
        sort_order: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_regions_filter_by_kind(pool: PgPool) {
    RegionRepo::create(&pool, &region("Omineca", RegionKind::Env))
        .await
        .unwrap();
    RegionRepo::create(&pool, &region("Peace", RegionKind::Env))
        .await
        .unwrap();
    RegionRepo::create(&pool, &region("Northeast", RegionKind::Flnr))
        .await
        .unwrap();

    let env = RegionRepo::list(&pool, Some(RegionKind::Env)).await.unwrap();
    assert_eq!(env.len(), 2);
    assert!(env.iter().all(|r| r.kind() == Some(RegionKind::Env)));

    let flnr = RegionRepo::list(&pool, Some(RegionKind::Flnr)).await.unwrap();
    assert_eq!(flnr.len(), 1);
    assert_eq!(flnr[0].name, "Northeast");

    let all = RegionRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sub_types_are_scoped_to_their_type(pool: PgPool) {
    let mines = ProjectTypeRepo::create(
        &pool,
        &CreateProjectType {
            name: "Mines".to_string(),
            sort_order: Some(1),
        },
    )
    .await
    .unwrap();
    let energy = ProjectTypeRepo::create(
        &pool,
        &CreateProjectType {
            name: "Energy".to_string(),
            sort_order: Some(2),
        },
    )
    .await
    .unwrap();

    for (type_id, name, short) in [
        (mines.id, "Coal Mines", "Coal"),
        (mines.id, "Mineral Mines", "Mineral"),
        (energy.id, "Hydroelectric", "Hydro"),
    ] {
        SubTypeRepo::create(
            &pool,
            &CreateSubType {
                type_id,
                name: name.to_string(),
                short_name: short.to_string(),
                sort_order: None,
            },
        )
        .await
        .unwrap();
    }

    let mine_subs = SubTypeRepo::list_by_type(&pool, mines.id).await.unwrap();
    assert_eq!(
        mine_subs.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        vec!["Coal Mines", "Mineral Mines"]
    );

    let types = ProjectTypeRepo::list(&pool).await.unwrap();
    assert_eq!(
        types.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        vec!["Mines", "Energy"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_proponents_listed_by_name(pool: PgPool) {
    for name in ["Zeta Hydro", "Acme Mining"] {
        ProponentRepo::create(
            &pool,
            &CreateProponent {
                name: name.to_string(),
            },
        )
        .await
        .unwrap();
    }

    let names: Vec<String> = ProponentRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Acme Mining", "Zeta Hydro"]);
}
