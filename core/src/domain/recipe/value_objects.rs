pub const RECIPE_MAX_TOKENS: u32 = 500;

/// Labels offered on the style page. Submissions are not restricted to these.
pub const RECIPE_STYLE_OPTIONS: &[&str] = &[
    "식사용",
    "간식용",
    "다이어트용",
    "술안주용",
    "야식용",
    "도시락용",
];

pub fn recipe_prompt(ingredients: &[String], styles: &[String]) -> String {
    format!(
        "나는 {}을(를) 가지고 있습니다. 이 재료들로 '{}' 스타일의 요리를 추천하고, 자세한 레시피를 알려주세요.",
        ingredients.join(", "),
        styles.join(", ")
    )
}
