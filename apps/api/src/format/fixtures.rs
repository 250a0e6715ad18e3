//! Advice document shared by formatter and orchestrator tests.

pub const SAMPLE_ADVICE: &str = r#"Here is your personalised plan.

### 💫 Quick Summary
Your marketing background and SQL basics are a strong start for analytics.

### 🎯 Recommended Roles
1. **Data Analyst** (Match Score: 8/10)
    - Salary Range: $60,000 - $90,000
    - Key Requirements: SQL, Excel, Tableau
    - Why It Fits: You already build campaign reports

### 📊 Skills Assessment
```skill-meter
Current Skills Relevant to AI / Data Science:
Python     [████░░░░░░] 40%
SQL        [██████░░░░] 60%
```

### 📚 Learning Path
1. **Month 1-2: Foundation**
    - Course: "Python for Everybody" (Coursera)
    - Project: "Campaign KPI notebook"
    - Expected Outcome: "Clean and explore data with pandas"

### 💡 Project Portfolio
```project-card
Project: Marketing Mix Model
Difficulty: ⭐⭐⭐☆☆
Duration: 3 weeks
Skills: Python, regression
Description: Attribute sales to channels
```

### 🗺️ Career Roadmap
```mermaid
graph LR; A-->B
```

### 🎓 Certifications
- Google Data Analytics Certificate (Coursera)
- Difficulty Level: ⭐⭐☆☆☆
- Time Commitment: 3-6 months
- Cost Range: $49/month
"#;
