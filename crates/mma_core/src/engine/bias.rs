// bias(talent + mood) 생성
use rand::Rng;

/// 경기마다 새로 뽑는 mood 변동 폭: [-MOOD_SWING, +MOOD_SWING)
pub const MOOD_SWING: f32 = 0.15;

/// 확률 모드 bias: fixed talent + uniform mood 변동.
///
/// talent는 선수 선택 시점에 한 번 정해진 값이고 여기서 다시 뽑지
/// 않는다. mood는 호출할 때마다(세션마다) 독립적으로 새로 뽑는다.
/// RNG를 주입받으므로 테스트에서 시드 고정이 가능하다.
pub fn calculate_bias<R: Rng + ?Sized>(fixed_talent: f32, rng: &mut R) -> f32 {
    let mood_variation = rng.gen_range(-MOOD_SWING..MOOD_SWING);
    fixed_talent + mood_variation
}

/// 결정 모드 bias: mood 변동 없이 fixed talent 그대로.
/// 챔피언십 검증이 재현 가능해야 하므로 랜덤 요소를 완전히 제거한다.
pub fn deterministic_bias(fixed_talent: f32) -> f32 {
    fixed_talent
}

/// bias에 따른 컨디션 메시지 (UI 표시용)
pub fn mood_message(bias: f32, athlete_name: &str) -> String {
    if bias > 0.15 {
        format!("{} feels sharp today!", athlete_name)
    } else if bias < -0.1 {
        format!("{} seems a bit tired today.", athlete_name)
    } else {
        format!("{} is ready to fight!", athlete_name)
    }
}
