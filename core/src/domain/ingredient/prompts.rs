pub const EXTRACTION_MAX_TOKENS: u32 = 100;
pub const EXTRACTION_TEMPERATURE: f32 = 0.0;

pub const EXTRACTION_SYSTEM_PROMPT: &str = "당신은 이미지 속 음식 재료를 추출하는 전문가입니다. \
반드시 한국어 재료명만 들어간 순수 JSON 배열 형식으로만 응답하세요. \
추가 설명이나 주석 없이 배열만 출력합니다.";

pub const EXTRACTION_USER_PROMPT: &str = "이미지를 분석해 음식 재료를 JSON 배열로 알려주세요.";
