use bevy::prelude::*;

use crate::core::constants::ui::*;
use crate::rendering::{ModelAssets, ModelLoadStatus};

/// Bottom-left model credit box
#[derive(Component)]
pub struct CreditPanel;

/// Banner that explains why fallback shapes are falling
#[derive(Component)]
pub struct LoadStatusText;

pub fn setup_overlay(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(CREDIT_MARGIN),
                left: Val::Px(CREDIT_MARGIN),
                padding: UiRect::all(Val::Px(CREDIT_PADDING)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(2.0),
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
            BorderRadius::all(Val::Px(CREDIT_CORNER_RADIUS)),
            CreditPanel,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(CREDIT_TEXT),
                TextFont {
                    font_size: CREDIT_TEXT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
            parent.spawn((
                Text::new(CREDIT_URL),
                TextFont {
                    font_size: CREDIT_URL_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR.with_alpha(0.7)),
            ));
        });

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: STATUS_TEXT_SIZE,
            ..default()
        },
        TextColor(WARNING_TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(CREDIT_MARGIN),
            left: Val::Px(CREDIT_MARGIN),
            ..default()
        },
        Visibility::Hidden,
        LoadStatusText,
    ));
}

/// Show the banner only when the model failed and the fallback is in use
pub fn update_load_status_text(
    model_assets: Res<ModelAssets>,
    mut banner: Query<(&mut Text, &mut Visibility), With<LoadStatusText>>,
) {
    if !model_assets.is_changed() {
        return;
    }

    for (mut text, mut visibility) in banner.iter_mut() {
        match &model_assets.status {
            ModelLoadStatus::Failed(reason) => {
                text.0 = format!("Burger model unavailable ({reason}), showing placeholders");
                *visibility = Visibility::Visible;
            }
            ModelLoadStatus::Loading | ModelLoadStatus::Ready => {
                text.0.clear();
                *visibility = Visibility::Hidden;
            }
        }
    }
}
