//! Spinning cube, drawn with CSS 3D transforms

use leptos::leptos_dom::helpers::AnimationFrameRequestHandle;
use leptos::*;
use primex_core::{MeshPose, RotatingMesh};

const FACES: [&str; 6] = [
    "translateZ(80px)",
    "rotateY(180deg) translateZ(80px)",
    "rotateY(90deg) translateZ(80px)",
    "rotateY(-90deg) translateZ(80px)",
    "rotateX(90deg) translateZ(80px)",
    "rotateX(-90deg) translateZ(80px)",
];

#[component]
pub fn SpinningCube(mesh: RotatingMesh) -> impl IntoView {
    let pose = create_rw_signal(mesh.pose());
    let mesh = store_value(mesh);
    let frame = store_value(None::<AnimationFrameRequestHandle>);

    create_effect(move |_| spin(mesh, pose, frame));
    on_cleanup(move || {
        if let Some(Some(handle)) = frame.try_update_value(Option::take) {
            handle.cancel();
        }
    });

    view! {
        <div class="perspective w-40 h-40 mx-auto">
            <div
                class="relative w-40 h-40 preserve-3d"
                style:transform=move || pose.get().css_transform()
            >
                {FACES.into_iter().map(|face| view! {
                    <div
                        class="absolute inset-0 border border-violet-300/40 bg-[#8b5cf6]/70 shadow-[0_0_40px_rgba(139,92,246,0.35)]"
                        style:transform=face
                    ></div>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Advance one frame, then schedule the next. Stops once the component's
/// stored values are gone.
fn spin(
    mesh: StoredValue<RotatingMesh>,
    pose: RwSignal<MeshPose>,
    frame: StoredValue<Option<AnimationFrameRequestHandle>>,
) {
    let next = request_animation_frame_with_handle(move || {
        let Some(next_pose) = mesh.try_update_value(|m| m.on_frame()) else {
            return;
        };
        pose.set(next_pose);
        spin(mesh, pose, frame);
    });

    match next {
        Ok(handle) => {
            frame.try_update_value(|f| *f = Some(handle));
        }
        Err(err) => tracing::warn!(?err, "animation frame unavailable"),
    }
}
