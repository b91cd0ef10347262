use crate::{category, order, order_item, product, review, user};
use crate::traits::Patch;
use anyhow::Result;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter};
use uuid::Uuid;

fn new_user() -> user::NewUser {
    user::NewUser {
        full_name: format!("Test Rider {}", Uuid::new_v4()),
        email: format!("rider_{}@example.com", Uuid::new_v4()),
        password_hash: "$2b$04$notarealhashbutlongenough".into(),
        phone_number: None,
        address: None,
        role: None,
        profile_image_url: None,
    }
}

/// Test user insert, lookup by email, patch and delete
#[tokio::test]
async fn test_user_crud() -> Result<()> {
    let Some(db) = super::setup_test_db().await? else { return Ok(()) };

    let draft = new_user();
    let created = draft.clone().into_active_model().insert(&db).await?;
    assert_eq!(created.email, draft.email);
    assert_eq!(created.role, user::DEFAULT_ROLE);

    let by_email = user::Entity::find().filter(user::Column::Email.eq(draft.email.clone())).one(&db).await?;
    assert_eq!(by_email.map(|u| u.id), Some(created.id));

    let mut patched = created.clone();
    user::UserChanges { address: Some("Ruta 5 km 12".into()), ..Default::default() }.apply(&mut patched);
    let mut am = created.clone().into_active_model();
    am.address = sea_orm::Set(patched.address.clone());
    let updated = am.update(&db).await?;
    assert_eq!(updated.address.as_deref(), Some("Ruta 5 km 12"));
    assert_eq!(updated.full_name, created.full_name);

    user::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(user::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// Duplicate emails are refused by the unique index
#[tokio::test]
async fn test_user_email_unique() -> Result<()> {
    let Some(db) = super::setup_test_db().await? else { return Ok(()) };

    let draft = new_user();
    let first = draft.clone().into_active_model().insert(&db).await?;
    let dup = draft.into_active_model().insert(&db).await;
    assert!(dup.is_err());

    user::Entity::delete_by_id(first.id).exec(&db).await?;
    Ok(())
}

/// Category -> product -> order -> item -> review chain, then cleanup in reverse
#[tokio::test]
async fn test_order_workflow() -> Result<()> {
    let Some(db) = super::setup_test_db().await? else { return Ok(()) };

    let u = new_user().into_active_model().insert(&db).await?;
    let c = category::NewCategory { name: format!("Naked {}", Uuid::new_v4()), description: None, image_url: None }
        .into_active_model()
        .insert(&db)
        .await?;
    let p = product::NewProduct {
        category_id: Some(c.id),
        name: "MT-07".into(),
        description: None,
        price: Decimal::new(799_000, 2),
        stock_quantity: Some(2),
        image_url: None,
        brand: Some("Yamaha".into()),
        model_year: Some(2023),
        engine_cc: Some(689),
        color: None,
        condition_status: None,
    }
    .into_active_model()
    .insert(&db)
    .await?;
    assert_eq!(p.price, Decimal::new(799_000, 2));

    let o = order::NewOrder {
        user_id: u.id,
        order_date: None,
        total_amount: order::total_of([(p.price, 1)]),
        status: None,
        shipping_address: "Depot 4".into(),
        payment_method: Some("card".into()),
    }
    .into_active_model()
    .insert(&db)
    .await?;
    assert_eq!(o.status, order::DEFAULT_STATUS);

    let item = order_item::NewOrderItem { order_id: o.id, product_id: p.id, quantity: 1, unit_price: p.price }
        .into_active_model()
        .insert(&db)
        .await?;
    let items = order_item::Entity::find().filter(order_item::Column::OrderId.eq(o.id)).all(&db).await?;
    assert_eq!(items.len(), 1);

    let r = review::NewReview { product_id: p.id, user_id: u.id, rating: 5, comment: Some("smooth".into()) }
        .into_active_model()
        .insert(&db)
        .await?;

    // parent rows are protected while children exist
    assert!(product::Entity::delete_by_id(p.id).exec(&db).await.is_err());

    review::Entity::delete_by_id(r.id).exec(&db).await?;
    order_item::Entity::delete_by_id(item.id).exec(&db).await?;
    order::Entity::delete_by_id(o.id).exec(&db).await?;
    product::Entity::delete_by_id(p.id).exec(&db).await?;
    category::Entity::delete_by_id(c.id).exec(&db).await?;
    user::Entity::delete_by_id(u.id).exec(&db).await?;
    Ok(())
}
