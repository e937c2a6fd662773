use super::model::{
    AspectRatio, CharacterBible, CinematicStyle, FullProjectData, ProjectSettings, SceneData,
    SceneId,
};

const DEFAULT_BIBLE_EN: &str = "Captain Nemo, a mysterious and commanding figure in his late forties, with broad shoulders, wearing a dark blue officer's uniform adorned with brass buttons and golden embroidery of mythical sea creatures. His swept-back dark hair with silver streaks and piercing blue eyes show wisdom and hidden sorrow. His posture is always proud and resolute.\n\nSophia, a young marine scientist in her late twenties, with curly chestnut hair tied in a loose bun, green eyes full of curiosity. She wears a waterproof light jacket over a white shirt and rugged cargo pants, holding a digital tablet and underwater sensors, always focused and alert.";

const DEFAULT_BIBLE_VI: &str = "Thuyền trưởng Nemo, người đàn ông bí ẩn quyền uy khoảng ngoài bốn mươi tuổi, bờ vai rộng, khoác quân phục xanh đậm với các nút đồng và thêu hình sinh vật biển màu vàng. Mái tóc đen vuốt gọn, có vệt bạc, mắt xanh sâu thẳm toát lên vẻ thông thái và u hoài. Dáng đứng nghiêm nghị, kiên cường.\n\nSophia, nhà khoa học trẻ về biển khoảng cuối hai mươi tuổi, tóc nâu xoăn buộc thành búi lỏng, mắt xanh lá đầy tò mò. Cô mặc áo khoác chống nước ngoài áo sơ mi trắng, quần cargo bụi bặm, tay cầm máy tính bảng và bộ cảm biến dưới nước, nét mặt chăm chú và tập trung.";

/// Session-start project: a non-empty bilingual bible, valid enumerated
/// style/ratio, positive scene count, empty scene list.
pub fn default_project() -> FullProjectData {
    FullProjectData {
        settings: ProjectSettings {
            title: None,
            context: "Sâu dưới Thái Bình Dương, bên trong tàu ngầm Nautilus công nghệ hơi nước cổ điển nhưng tiên tiến, với ánh sáng tối, mờ ảo và chi tiết kim loại đồng.".to_string(),
            video_idea: "Khám phá một cổ vật phát sáng bị lãng quên dưới đáy biển sâu, dẫn đến một khoảnh khắc đối đầu căng thẳng và kịch tính.".to_string(),
            script: String::new(),
            style: CinematicStyle::SciFi,
            ratio: AspectRatio::Ratio16x9,
            scene_count: 3,
        },
        character_bible: CharacterBible {
            english: DEFAULT_BIBLE_EN.to_string(),
            vietnamese: DEFAULT_BIBLE_VI.to_string(),
        },
        scenes: Vec::new(),
    }
}

/// Sample stop-motion project with pre-built scenes, loadable as a preset.
pub fn toy_preset() -> FullProjectData {
    let scenes = vec![
        SceneData {
            id: SceneId::from("s_1"),
            number: 1,
            description_en: "Objects: a tiny felt boot, a chocolate bar, a wooden desk lamp.\nAtmosphere: cozy late-night desk clutter, warm and playful.\nSFX: soft fabric rustle, a faint plastic crinkle.".to_string(),
            description_vi: "Objects: chiếc ủng nỉ tí hon, thanh sô cô la, đèn bàn gỗ.\nAtmosphere: góc bàn đêm khuya ấm cúng, bừa bộn vui nhộn.\nSFX: tiếng vải sột soạt, tiếng nhựa kêu khẽ.".to_string(),
            camera: "Static macro shot at desk level".to_string(),
            lighting: "Playful, whimsical, warm lighting".to_string(),
            action: "The felt boot hops twice and nudges the chocolate bar".to_string(),
            transition: Some("Cut to".to_string()),
            dialogue: None,
        },
        SceneData {
            id: SceneId::from("s_2"),
            number: 2,
            description_en: "Objects: the felt boot balancing on the chocolate bar like a skateboard.\nAtmosphere: mischievous, bright toy-world energy.\nSFX: cardboard wheels rolling, a tiny squeak.".to_string(),
            description_vi: "Objects: chiếc ủng nỉ đứng thăng bằng trên thanh sô cô la như ván trượt.\nAtmosphere: tinh nghịch, tràn đầy năng lượng thế giới đồ chơi.\nSFX: tiếng bánh xe bìa cứng lăn, tiếng kêu chít khẽ.".to_string(),
            camera: "Slow lateral tracking along the desk edge".to_string(),
            lighting: "Warm key light with soft paper-bounce fill".to_string(),
            action: "The boot rides the chocolate bar across the desk, wobbling".to_string(),
            transition: Some("Whip pan".to_string()),
            dialogue: Some("Wheee!".to_string()),
        },
        SceneData {
            id: SceneId::from("s_3"),
            number: 3,
            description_en: "Objects: the boot and chocolate bar resting against a sleeping cat figurine.\nAtmosphere: calm wind-down, bedtime warmth.\nSFX: a gentle yawn, lamp click, silence.".to_string(),
            description_vi: "Objects: chiếc ủng và thanh sô cô la tựa vào tượng mèo đang ngủ.\nAtmosphere: yên bình thư giãn, ấm áp giờ đi ngủ.\nSFX: tiếng ngáp nhẹ, tiếng tắt đèn, im lặng.".to_string(),
            camera: "Slow push-in to a close-up, then settle".to_string(),
            lighting: "Dim amber lamp glow fading to dark".to_string(),
            action: "The boot tucks itself against the figurine as the lamp switches off".to_string(),
            transition: Some("Fade to black".to_string()),
            dialogue: None,
        },
    ];

    FullProjectData {
        settings: ProjectSettings {
            title: Some("Boots & KitKat".to_string()),
            context: "A cluttered wooden desk at night, lit by a single warm lamp, everything built from felt, cardboard and clay.".to_string(),
            video_idea: "A tiny felt boot befriends a chocolate bar and they sneak one last ride across the desk before bedtime.".to_string(),
            script: String::new(),
            style: CinematicStyle::StopMotion,
            ratio: AspectRatio::Ratio9x16,
            scene_count: 3,
        },
        character_bible: CharacterBible {
            english: "Boots, a palm-sized felt boot in faded red with mismatched white stitching and a bent brass eyelet for an eye, endlessly curious and a little clumsy.\n\nKitKat, a chocolate bar in a half-torn wrapper, deadpan and patient, communicates by tilting and short hops.".to_string(),
            vietnamese: "Boots, chiếc ủng nỉ nhỏ bằng lòng bàn tay màu đỏ bạc màu, đường khâu trắng lệch, một lỗ xỏ dây bằng đồng cong làm mắt, tò mò vô tận và hơi vụng về.\n\nKitKat, thanh sô cô la trong lớp vỏ rách một nửa, mặt lạnh và kiên nhẫn, giao tiếp bằng cách nghiêng mình và nhảy những bước ngắn.".to_string(),
        },
        scenes,
    }
}
